//! Navigation for Tally
//!
//! This module provides:
//! - Route definitions with path mapping
//! - The [`Navigator`] seam over the host's stack navigator
//! - A reference [`NavigationStack`] host
//! - The [`NavigationOrchestrator`], which turns screen events into push/pop
//!   calls according to a fixed transition table

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Route Definitions
// =============================================================================

/// All screens in the onboarding flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Launch screen
    #[default]
    Splash,
    /// Onboarding landing
    Welcome,
    /// Sign in form
    Login,
    /// Sign up form
    Register,
}

impl Route {
    /// All routes in flow order
    pub fn all() -> [Route; 4] {
        [Route::Splash, Route::Welcome, Route::Login, Route::Register]
    }

    /// Stable key (also the animation guard key)
    pub fn key(&self) -> &'static str {
        match self {
            Route::Splash => "splash",
            Route::Welcome => "welcome",
            Route::Login => "login",
            Route::Register => "register",
        }
    }

    /// URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Route::Splash => "/",
            Route::Welcome => "/(auth)/welcome",
            Route::Login => "/(auth)/login",
            Route::Register => "/(auth)/register",
        }
    }

    /// Match a URL path
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Route::all()
            .into_iter()
            .find(|route| route.to_path() == normalized)
    }

    /// Screen title
    pub fn title(&self) -> &'static str {
        match self {
            Route::Splash => "Tally",
            Route::Welcome => "Welcome",
            Route::Login => "Login",
            Route::Register => "Sign up",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Host stack navigator
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send {
    /// Push a route on top of the stack
    fn push(&mut self, route: Route);

    /// Pop the top route; false when already at the root
    fn pop(&mut self) -> bool;

    /// The top route
    fn current(&self) -> Route;
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// In-memory stack navigator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Entries above the root (bottom to top)
    entries: Vec<StackEntry>,
    /// Root entry, never popped
    root: StackEntry,
}

impl NavigationStack {
    /// Create a stack holding only `root`
    pub fn new(root: Route) -> Self {
        Self {
            entries: Vec::new(),
            root: StackEntry::new(root),
        }
    }

    /// The top entry
    pub fn current_entry(&self) -> &StackEntry {
        self.entries.last().unwrap_or(&self.root)
    }

    /// Whether there is anything to pop
    pub fn can_go_back(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of entries including the root
    pub fn depth(&self) -> usize {
        self.entries.len() + 1
    }

    /// Routes from bottom to top
    pub fn routes(&self) -> Vec<Route> {
        std::iter::once(&self.root)
            .chain(self.entries.iter())
            .map(|entry| entry.route)
            .collect()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl Navigator for NavigationStack {
    fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    fn pop(&mut self) -> bool {
        self.entries.pop().is_some()
    }

    fn current(&self) -> Route {
        self.current_entry().route
    }
}

// =============================================================================
// Transitions
// =============================================================================

/// Events that may move the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavEvent {
    /// Splash hold elapsed
    SplashTimerElapsed,
    /// "Sign In" pressed on Welcome
    SignInTapped,
    /// "Get Started" pressed on Welcome
    GetStartedTapped,
    /// "Sign up" pressed on Login
    SignUpTapped,
    /// Back pressed
    BackTapped,
}

/// What a matched event does to the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "route", rename_all = "lowercase")]
pub enum NavEffect {
    /// Push a route
    Push(Route),
    /// Pop the top route
    Pop,
}

/// Animation type for navigation transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationAnimation {
    /// Push animation (slide in from right)
    #[default]
    Push,
    /// Pop animation (slide out to right)
    Pop,
}

/// A completed transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Route before
    pub from: Route,
    /// Route after
    pub to: Route,
    /// Host animation
    pub animation: NavigationAnimation,
}

/// The transition table
///
/// Returns `None` for events the route does not accept.
pub fn step(from: Route, event: NavEvent) -> Option<NavEffect> {
    use NavEvent::*;
    match (from, event) {
        (Route::Splash, SplashTimerElapsed) => Some(NavEffect::Push(Route::Welcome)),
        (Route::Welcome, SignInTapped) => Some(NavEffect::Push(Route::Login)),
        (Route::Welcome, GetStartedTapped) => Some(NavEffect::Push(Route::Register)),
        (Route::Login, SignUpTapped) => Some(NavEffect::Push(Route::Register)),
        (Route::Login | Route::Register, BackTapped) => Some(NavEffect::Pop),
        _ => None,
    }
}

// =============================================================================
// Orchestrator
// =============================================================================

/// Applies the transition table to a [`Navigator`]
///
/// Every event is checked against the navigator's current top route, so an
/// event raised by a screen that is no longer on top (a double tap landing
/// after the push, a late timer) is ignored.
#[derive(Debug)]
pub struct NavigationOrchestrator<N: Navigator> {
    navigator: N,
}

impl<N: Navigator> NavigationOrchestrator<N> {
    /// Wrap a navigator
    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// The wrapped navigator
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// The top route
    pub fn current(&self) -> Route {
        self.navigator.current()
    }

    /// Handle an event
    pub fn dispatch(&mut self, event: NavEvent) -> Option<Transition> {
        let from = self.navigator.current();
        let Some(effect) = step(from, event) else {
            tracing::warn!(route = %from, ?event, "Ignoring navigation event");
            return None;
        };

        let transition = match effect {
            NavEffect::Push(to) => {
                self.navigator.push(to);
                Transition {
                    from,
                    to,
                    animation: NavigationAnimation::Push,
                }
            }
            NavEffect::Pop => {
                if !self.navigator.pop() {
                    tracing::warn!(route = %from, "Nothing to pop");
                    return None;
                }
                Transition {
                    from,
                    to: self.navigator.current(),
                    animation: NavigationAnimation::Pop,
                }
            }
        };

        tracing::info!(
            from = %transition.from,
            to = %transition.to,
            animation = ?transition.animation,
            "Navigated"
        );
        Some(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    // ==========================================================================
    // Route Tests
    // ==========================================================================

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Splash.to_path(), "/");
        assert_eq!(Route::Welcome.to_path(), "/(auth)/welcome");
        assert_eq!(Route::Login.to_path(), "/(auth)/login");
        assert_eq!(Route::Register.to_path(), "/(auth)/register");
    }

    #[test]
    fn test_route_from_path() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.to_path()), Some(route));
        }
        assert_eq!(Route::from_path("/(auth)/login/"), Some(Route::Login));
        assert_eq!(Route::from_path("/(auth)/login?next=home"), Some(Route::Login));
        assert_eq!(Route::from_path(""), Some(Route::Splash));
        assert_eq!(Route::from_path("/settings"), None);
    }

    #[test]
    fn test_route_keys_unique() {
        let keys: std::collections::HashSet<_> = Route::all().iter().map(|r| r.key()).collect();
        assert_eq!(keys.len(), 4);
    }

    // ==========================================================================
    // Stack Tests
    // ==========================================================================

    #[test]
    fn test_stack_push_pop() {
        let mut stack = NavigationStack::new(Route::Splash);
        assert_eq!(stack.current(), Route::Splash);
        assert!(!stack.can_go_back());
        assert!(!stack.pop());

        stack.push(Route::Welcome);
        stack.push(Route::Login);
        assert_eq!(stack.depth(), 3);
        assert_eq!(stack.routes(), vec![Route::Splash, Route::Welcome, Route::Login]);

        assert!(stack.pop());
        assert_eq!(stack.current(), Route::Welcome);
    }

    #[test]
    fn test_stack_entry_keys_unique() {
        let mut stack = NavigationStack::default();
        let root_key = stack.current_entry().key.clone();
        stack.push(Route::Splash);
        assert_ne!(stack.current_entry().key, root_key);
    }

    // ==========================================================================
    // Transition Table Tests
    // ==========================================================================

    #[test]
    fn test_step_table() {
        use NavEvent::*;
        assert_eq!(step(Route::Splash, SplashTimerElapsed), Some(NavEffect::Push(Route::Welcome)));
        assert_eq!(step(Route::Welcome, SignInTapped), Some(NavEffect::Push(Route::Login)));
        assert_eq!(step(Route::Welcome, GetStartedTapped), Some(NavEffect::Push(Route::Register)));
        assert_eq!(step(Route::Login, SignUpTapped), Some(NavEffect::Push(Route::Register)));
        assert_eq!(step(Route::Login, BackTapped), Some(NavEffect::Pop));
        assert_eq!(step(Route::Register, BackTapped), Some(NavEffect::Pop));
    }

    #[test]
    fn test_step_rejects_everything_else() {
        use NavEvent::*;
        let accepted = [
            (Route::Splash, SplashTimerElapsed),
            (Route::Welcome, SignInTapped),
            (Route::Welcome, GetStartedTapped),
            (Route::Login, SignUpTapped),
            (Route::Login, BackTapped),
            (Route::Register, BackTapped),
        ];
        let events = [SplashTimerElapsed, SignInTapped, GetStartedTapped, SignUpTapped, BackTapped];
        for route in Route::all() {
            for event in events {
                if !accepted.contains(&(route, event)) {
                    assert_eq!(step(route, event), None, "{route} / {event:?}");
                }
            }
        }
    }

    // ==========================================================================
    // Orchestrator Tests
    // ==========================================================================

    #[test]
    fn test_orchestrator_pushes_via_navigator() {
        let mut nav = MockNavigator::new();
        nav.expect_current().return_const(Route::Welcome);
        nav.expect_push().with(eq(Route::Login)).times(1).return_const(());
        nav.expect_pop().never();

        let mut orchestrator = NavigationOrchestrator::new(nav);
        let transition = orchestrator.dispatch(NavEvent::SignInTapped).unwrap();
        assert_eq!(transition.from, Route::Welcome);
        assert_eq!(transition.to, Route::Login);
        assert_eq!(transition.animation, NavigationAnimation::Push);
    }

    #[test]
    fn test_orchestrator_ignores_unmatched_event() {
        let mut nav = MockNavigator::new();
        nav.expect_current().return_const(Route::Login);
        nav.expect_push().never();
        nav.expect_pop().never();

        let mut orchestrator = NavigationOrchestrator::new(nav);
        assert_eq!(orchestrator.dispatch(NavEvent::SignInTapped), None);
        assert_eq!(orchestrator.dispatch(NavEvent::SplashTimerElapsed), None);
    }

    #[test]
    fn test_orchestrator_pop_at_root() {
        let mut nav = MockNavigator::new();
        nav.expect_current().return_const(Route::Login);
        nav.expect_pop().times(1).return_const(false);

        let mut orchestrator = NavigationOrchestrator::new(nav);
        assert_eq!(orchestrator.dispatch(NavEvent::BackTapped), None);
    }

    #[test]
    fn test_full_flow_on_stack() {
        let mut orchestrator = NavigationOrchestrator::new(NavigationStack::new(Route::Splash));

        orchestrator.dispatch(NavEvent::SplashTimerElapsed).unwrap();
        orchestrator.dispatch(NavEvent::SignInTapped).unwrap();
        // A second tap lands on Login and is dropped
        assert_eq!(orchestrator.dispatch(NavEvent::SignInTapped), None);
        orchestrator.dispatch(NavEvent::SignUpTapped).unwrap();
        assert_eq!(
            orchestrator.navigator().routes(),
            vec![Route::Splash, Route::Welcome, Route::Login, Route::Register]
        );

        let back = orchestrator.dispatch(NavEvent::BackTapped).unwrap();
        assert_eq!(back.to, Route::Login);
        assert_eq!(back.animation, NavigationAnimation::Pop);
        orchestrator.dispatch(NavEvent::BackTapped).unwrap();
        assert_eq!(orchestrator.current(), Route::Welcome);
    }
}
