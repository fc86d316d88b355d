//! Test surface that records every effect the search component performs.

use ghgate_core::search::{SearchSurface, SEARCH_FORM_ID, SEARCH_INPUT_ID};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub elements: Vec<&'static str>,
    pub focused: bool,
    pub shaking: bool,
    pub styles: Vec<String>,
    pub alerts: Vec<String>,
    pub navigations: Vec<String>,
}

impl RecordingSurface {
    /// A surface carrying the form and input the component binds to.
    pub fn page() -> Self {
        Self {
            elements: vec![SEARCH_FORM_ID, SEARCH_INPUT_ID],
            ..Self::default()
        }
    }
}

impl SearchSurface for RecordingSurface {
    fn has_element(&self, id: &str) -> bool {
        self.elements.iter().any(|e| *e == id)
    }

    fn input_focused(&self) -> bool {
        self.focused
    }

    fn focus_input(&mut self) {
        self.focused = true;
    }

    fn set_shake(&mut self, on: bool) {
        self.shaking = on;
    }

    fn inject_style(&mut self, css: &str) {
        self.styles.push(css.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
    }
}
