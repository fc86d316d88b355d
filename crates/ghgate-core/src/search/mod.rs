//! The search front-door: normalize one line of user input into a URL,
//! validate that it targets GitHub, and send the surface to the proxy path.
//!
//! [`SearchRedirector`] owns no I/O of its own; every visible effect goes
//! through the [`SearchSurface`] trait. Time enters only as explicit
//! [`Instant`] arguments, so the shake feedback is a stored deadline the
//! caller drives via [`SearchRedirector::tick`] rather than a background
//! timer.

mod normalize;
mod surface;
mod validate;

pub use normalize::{candidate_url, has_scheme};
pub use surface::{SearchSurface, SEARCH_FORM_ID, SEARCH_INPUT_ID};
pub use validate::{validate_target, TargetError, ALLOWED_HOSTS};

use std::time::{Duration, Instant};
use thiserror::Error;

/// How long the invalid-input shake lasts.
pub const SHAKE_DURATION: Duration = Duration::from_millis(500);

/// Blocking message shown when the candidate is not a GitHub URL.
pub const INVALID_TARGET_ALERT: &str = "Please enter a valid GitHub URL";

/// Stylesheet defining the shake animation, injected once at initialization.
pub const SHAKE_STYLE: &str = "
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
    20%, 40%, 60%, 80% { transform: translateX(5px); }
}

.shake {
    animation: shake 0.5s;
}
";

/// The surface is missing an element the component must bind to.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("surface is missing required element {element:?}")]
pub struct InitError {
    pub element: &'static str,
}

/// Result of one submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Candidate accepted; the surface was sent to this path.
    Navigated(String),
    /// Nothing but whitespace was entered; shake feedback started.
    EmptyInput,
    /// Candidate rejected; the alert was shown.
    DisallowedTarget(TargetError),
}

/// Result of one keydown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Focus moved to the search input; the caller must suppress the key's
    /// default effect so the character is not typed anywhere.
    FocusedInput,
    /// Key not handled here.
    Ignored,
}

/// Path the surface is sent to: the candidate URL as a path suffix of the
/// current origin, e.g. `github.com/foo/bar` -> `/https://github.com/foo/bar`.
pub fn redirect_path(candidate: &str) -> String {
    format!("/{candidate}")
}

/// Search form handler bound to a [`SearchSurface`].
pub struct SearchRedirector<S: SearchSurface> {
    surface: S,
    initialized: bool,
    shake_until: Option<Instant>,
}

impl<S: SearchSurface> SearchRedirector<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            initialized: false,
            shake_until: None,
        }
    }

    /// Binds the component to its surface.
    ///
    /// Verifies that the search form and input exist, then injects the shake
    /// stylesheet. Initializing twice is a no-op, so the style block is never
    /// appended more than once.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        for element in [SEARCH_FORM_ID, SEARCH_INPUT_ID] {
            if !self.surface.has_element(element) {
                return Err(InitError { element });
            }
        }
        if self.initialized {
            return Ok(());
        }
        self.surface.inject_style(SHAKE_STYLE);
        self.initialized = true;
        tracing::debug!("search redirector initialized");
        Ok(())
    }

    /// Handles one form submission.
    ///
    /// Empty input starts the shake feedback and nothing else. A candidate
    /// that fails [`validate_target`] raises the blocking alert. A valid
    /// candidate navigates the surface to [`redirect_path`]. Synchronous and
    /// deterministic; no outcome is an error to the caller.
    pub fn handle_submit(&mut self, raw_input: &str, now: Instant) -> SubmitOutcome {
        let Some(candidate) = candidate_url(raw_input) else {
            self.surface.set_shake(true);
            self.shake_until = Some(now + SHAKE_DURATION);
            return SubmitOutcome::EmptyInput;
        };
        if let Err(err) = validate_target(&candidate) {
            tracing::info!("rejected search target {candidate:?}: {err}");
            self.surface.alert(INVALID_TARGET_ALERT);
            return SubmitOutcome::DisallowedTarget(err);
        }
        let path = redirect_path(&candidate);
        tracing::info!("navigating to proxy path {path}");
        self.surface.navigate(&path);
        SubmitOutcome::Navigated(path)
    }

    /// Handles one keydown: `/` focuses the search input unless it already
    /// has focus. Every other key is ignored.
    pub fn handle_keydown(&mut self, key: char) -> KeyOutcome {
        if key == '/' && !self.surface.input_focused() {
            self.surface.focus_input();
            return KeyOutcome::FocusedInput;
        }
        KeyOutcome::Ignored
    }

    /// Clears the shake feedback once its deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.shake_until.is_some_and(|deadline| now >= deadline) {
            self.surface.set_shake(false);
            self.shake_until = None;
        }
    }

    /// Cancels any pending feedback so nothing fires after the component is
    /// discarded.
    pub fn teardown(&mut self) {
        if self.shake_until.take().is_some() {
            self.surface.set_shake(false);
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakePage {
        missing_input: bool,
        focused: bool,
        shaking: bool,
        styles: usize,
        alerts: Vec<String>,
        navigations: Vec<String>,
    }

    impl SearchSurface for FakePage {
        fn has_element(&self, id: &str) -> bool {
            !(self.missing_input && id == SEARCH_INPUT_ID)
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
        fn inject_style(&mut self, _css: &str) {
            self.styles += 1;
        }
        fn alert(&mut self, message: &str) {
            self.alerts.push(message.to_string());
        }
        fn navigate(&mut self, path: &str) {
            self.navigations.push(path.to_string());
        }
    }

    fn ready() -> SearchRedirector<FakePage> {
        let mut r = SearchRedirector::new(FakePage::default());
        r.initialize().unwrap();
        r
    }

    #[test]
    fn initialize_checks_required_elements() {
        let mut r = SearchRedirector::new(FakePage {
            missing_input: true,
            ..Default::default()
        });
        assert_eq!(
            r.initialize(),
            Err(InitError {
                element: SEARCH_INPUT_ID
            })
        );
    }

    #[test]
    fn initialize_injects_style_once() {
        let mut r = ready();
        r.initialize().unwrap();
        r.initialize().unwrap();
        assert_eq!(r.surface().styles, 1);
    }

    #[test]
    fn valid_input_navigates() {
        let mut r = ready();
        let outcome = r.handle_submit("github.com/torvalds/linux", Instant::now());
        assert_eq!(
            outcome,
            SubmitOutcome::Navigated("/https://github.com/torvalds/linux".into())
        );
        assert_eq!(
            r.surface().navigations,
            vec!["/https://github.com/torvalds/linux"]
        );
        assert!(r.surface().alerts.is_empty());
    }

    #[test]
    fn empty_input_shakes_and_never_navigates() {
        let mut r = ready();
        let start = Instant::now();
        assert_eq!(r.handle_submit("   ", start), SubmitOutcome::EmptyInput);
        assert!(r.surface().shaking);
        assert!(r.surface().navigations.is_empty());

        // Not yet due.
        r.tick(start + Duration::from_millis(100));
        assert!(r.surface().shaking);

        r.tick(start + SHAKE_DURATION);
        assert!(!r.surface().shaking);
    }

    #[test]
    fn foreign_host_alerts_and_never_navigates() {
        let mut r = ready();
        let outcome = r.handle_submit("example.com/evil", Instant::now());
        assert!(matches!(outcome, SubmitOutcome::DisallowedTarget(_)));
        assert_eq!(r.surface().alerts, vec![INVALID_TARGET_ALERT]);
        assert!(r.surface().navigations.is_empty());
    }

    #[test]
    fn slash_focuses_input_once() {
        let mut r = ready();
        assert_eq!(r.handle_keydown('/'), KeyOutcome::FocusedInput);
        assert!(r.surface().focused);
        // Already focused: nothing further.
        assert_eq!(r.handle_keydown('/'), KeyOutcome::Ignored);
        assert_eq!(r.handle_keydown('a'), KeyOutcome::Ignored);
    }

    #[test]
    fn teardown_cancels_pending_shake() {
        let mut r = ready();
        r.handle_submit("", Instant::now());
        assert!(r.surface().shaking);
        r.teardown();
        assert!(!r.surface().shaking);
        // A later tick finds nothing to clear.
        r.tick(Instant::now() + SHAKE_DURATION);
        assert!(!r.surface().shaking);
    }
}
