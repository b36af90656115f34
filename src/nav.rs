//! Client-side navigation boundary.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Route the client is sent to after session invalidation.
pub const LOGIN_PATH: &str = "/login";

/// External router collaborator.
///
/// Invalidation asks it for the login entry point; what "navigating" means
/// belongs to the host (a browser redirect, a screen swap, a printed hint).
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, path: &str);
}

/// Navigator for contexts with nowhere to go.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to(&self, _path: &str) {}
}
