//! Surface interface between the search component and its host page.
//!
//! The component only depends on this trait and does not know whether it is
//! driving a real page, a terminal front-end, or a test recorder.

/// Identifier of the form element the component binds to.
pub const SEARCH_FORM_ID: &str = "search-form";

/// Identifier of the text input the component binds to.
pub const SEARCH_INPUT_ID: &str = "search-input";

/// Everything the search component is allowed to do to its host.
pub trait SearchSurface {
    /// Whether an element with the given identifier exists on the surface.
    fn has_element(&self, id: &str) -> bool;

    /// Whether the search input currently holds focus.
    fn input_focused(&self) -> bool;

    /// Move focus to the search input.
    fn focus_input(&mut self);

    /// Toggle the shake class on the search input.
    fn set_shake(&mut self, on: bool);

    /// Append a stylesheet block to the surface.
    fn inject_style(&mut self, css: &str);

    /// Show a blocking message to the user.
    fn alert(&mut self, message: &str);

    /// Navigate to a path on the current origin.
    fn navigate(&mut self, path: &str);
}
