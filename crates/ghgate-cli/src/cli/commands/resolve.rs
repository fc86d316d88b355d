//! `ghgate resolve <input>` – run the search pipeline on one input.

use anyhow::{bail, Result};
use ghgate_core::search::{
    SearchRedirector, SearchSurface, SubmitOutcome, SEARCH_FORM_ID, SEARCH_INPUT_ID,
};
use std::time::Instant;

/// Surface for a one-shot terminal run: alerts go to stderr, the navigation
/// target to stdout. The input "field" is the argument itself, so it counts
/// as focused and feedback styling is a no-op.
struct TerminalSurface;

impl SearchSurface for TerminalSurface {
    fn has_element(&self, id: &str) -> bool {
        id == SEARCH_FORM_ID || id == SEARCH_INPUT_ID
    }

    fn input_focused(&self) -> bool {
        true
    }

    fn focus_input(&mut self) {}

    fn set_shake(&mut self, _on: bool) {}

    fn inject_style(&mut self, _css: &str) {}

    fn alert(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn navigate(&mut self, path: &str) {
        println!("{path}");
    }
}

pub fn run_resolve(input: &str) -> Result<()> {
    let mut redirector = SearchRedirector::new(TerminalSurface);
    redirector.initialize()?;
    match redirector.handle_submit(input, Instant::now()) {
        SubmitOutcome::Navigated(_) => Ok(()),
        SubmitOutcome::EmptyInput => bail!("empty input"),
        SubmitOutcome::DisallowedTarget(err) => Err(err.into()),
    }
}
