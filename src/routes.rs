//! Route table and navigation.
//!
//! The application has five fixed routes. Paths are matched exactly:
//! case-sensitive, no trailing-slash normalization, no parameters. A path
//! with no route renders no page at all; there is deliberately no fallback.
//!
//! Navigation is a capability ([`Navigator`]) handed to whatever needs to
//! change the route, rather than something reached through a global.

use std::fmt;

use tracing::{info, warn};

/// A page the application can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page.
    Home,
    /// Search results. No page content exists for it yet.
    ResultPage,
    /// Product search entry.
    SearchPage,
    /// Sign-in form.
    SignIn,
    /// Sign-up form.
    SignUp,
}

impl Route {
    /// Every route, in table order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::ResultPage,
        Route::SearchPage,
        Route::SignIn,
        Route::SignUp,
    ];

    /// The literal path this route is mounted at.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::ResultPage => "/resultpage",
            Route::SearchPage => "/searchpage",
            Route::SignIn => "/signin",
            Route::SignUp => "/signup",
        }
    }

    /// Looks up the route mounted at `path`.
    pub fn from_path(path: &str) -> Option<Route> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }

    /// Window title shown while this route is active.
    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Cartana",
            Route::ResultPage => "Results - Cartana",
            Route::SearchPage => "Search - Cartana",
            Route::SignIn => "Sign In - Cartana",
            Route::SignUp => "Sign Up - Cartana",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Something that can change the current route.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Requests a route change to `path`.
    fn navigate(&mut self, path: &str);
}

/// In-app location with back/forward history.
///
/// Behaves like a browser history stack: navigating pushes a new entry and
/// drops anything ahead of the cursor. Entries are raw paths, so a path with
/// no route can still be the current location.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<String>,
    cursor: usize,
}

impl Router {
    /// Creates a router positioned at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            history: vec![initial.into()],
            cursor: 0,
        }
    }

    /// The current path.
    pub fn current_path(&self) -> &str {
        &self.history[self.cursor]
    }

    /// The route for the current path, if one is mounted there.
    pub fn current_route(&self) -> Option<Route> {
        Route::from_path(self.current_path())
    }

    /// Number of entries in the history stack.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Steps back one entry. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        let from = self.cursor;
        self.cursor -= 1;
        info!(from = %self.history[from], to = %self.current_path(), "navigated back");
        true
    }

    /// Steps forward one entry. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        let from = self.cursor;
        self.cursor += 1;
        info!(from = %self.history[from], to = %self.current_path(), "navigated forward");
        true
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Home.path())
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        let from = self.current_path().to_string();
        self.history.truncate(self.cursor + 1);
        self.history.push(path.to_string());
        self.cursor = self.history.len() - 1;

        info!(from = %from, to = %path, "route change");
        if Route::from_path(path).is_none() {
            warn!(path = %path, "no page is mounted at this path");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn table_has_the_five_literal_paths() {
        let paths: Vec<_> = Route::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(
            paths,
            vec!["/", "/resultpage", "/searchpage", "/signin", "/signup"]
        );
    }

    #[test]
    fn unknown_path_has_no_route() {
        assert_eq!(Route::from_path("/nonexistent"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn matching_is_exact() {
        assert_eq!(Route::from_path("/SignIn"), None);
        assert_eq!(Route::from_path("/signin/"), None);
        assert_eq!(Route::from_path("signin"), None);
    }

    #[test]
    fn navigate_updates_current_location() {
        let mut router = Router::default();
        assert_eq!(router.current_route(), Some(Route::Home));

        router.navigate("/signup");
        assert_eq!(router.current_path(), "/signup");
        assert_eq!(router.current_route(), Some(Route::SignUp));
    }

    #[test]
    fn navigate_to_unknown_path_keeps_it_as_location() {
        let mut router = Router::default();
        router.navigate("/nonexistent");
        assert_eq!(router.current_path(), "/nonexistent");
        assert_eq!(router.current_route(), None);
    }

    #[test]
    fn empty_target_is_recorded_as_is() {
        let mut router = Router::default();
        router.navigate("");
        assert_eq!(router.current_path(), "");
        assert_eq!(router.current_route(), None);
        assert!(router.can_go_back());
    }

    #[test]
    fn navigating_to_same_path_still_records_entry() {
        let mut router = Router::default();
        router.navigate("/");
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn back_and_forward_walk_history() {
        let mut router = Router::default();
        router.navigate("/searchpage");
        router.navigate("/signin");

        assert!(router.back());
        assert_eq!(router.current_path(), "/searchpage");
        assert!(router.back());
        assert_eq!(router.current_path(), "/");
        assert!(!router.back());

        assert!(router.forward());
        assert!(router.forward());
        assert_eq!(router.current_path(), "/signin");
        assert!(!router.forward());
    }

    #[test]
    fn navigate_after_back_drops_forward_entries() {
        let mut router = Router::default();
        router.navigate("/searchpage");
        router.navigate("/signin");
        router.back();

        router.navigate("/signup");
        assert!(!router.can_go_forward());
        assert_eq!(router.depth(), 3);
        router.back();
        assert_eq!(router.current_path(), "/searchpage");
    }

    #[test]
    fn display_is_the_path() {
        assert_eq!(Route::SearchPage.to_string(), "/searchpage");
    }
}
