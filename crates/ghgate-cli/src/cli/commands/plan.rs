//! `ghgate plan <input>` – show the routing decision for one input.

use anyhow::{bail, Result};
use ghgate_core::config::GhgateConfig;
use ghgate_core::route::{self, RoutePlan};
use ghgate_core::search::{candidate_url, redirect_path, validate_target};

pub fn run_plan(input: &str, cfg: &GhgateConfig) -> Result<()> {
    let Some(candidate) = candidate_url(input) else {
        bail!("empty input");
    };
    validate_target(&candidate)?;
    println!("path:  {}", redirect_path(&candidate));
    match route::plan(&candidate, cfg) {
        RoutePlan::Deny(reason) => println!("route: deny ({reason})"),
        RoutePlan::Jsdelivr(url) => println!("route: jsdelivr {url}"),
        RoutePlan::Redirect(url) => println!("route: redirect {url}"),
        RoutePlan::Fetch(url) => println!("route: fetch {url}"),
    }
    Ok(())
}
