//! View transitions.
//!
//! Components never switch views themselves; they ask a [`Navigator`]. The
//! plugin's own navigator is [`Router`], which tracks the current route and a
//! back stack.

use crate::domain::Route;

/// Performs view transitions.
pub trait Navigator {
    fn go_to(&mut self, route: Route);
}

/// In-plugin navigator with back history.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
    transitions: usize,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn current(&self) -> &Route {
        &self.current
    }

    /// Number of transitions performed so far, including [`Router::back`].
    ///
    /// Used to detect that a view was left so its local state can be reset.
    #[must_use]
    pub const fn transitions(&self) -> usize {
        self.transitions
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Returns to the previous route. No-op at the start of history.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            return false;
        };
        tracing::debug!(from = %self.current, to = %previous, "navigating back");
        self.current = previous;
        self.transitions += 1;
        true
    }
}

impl Navigator for Router {
    fn go_to(&mut self, route: Route) {
        tracing::debug!(from = %self.current, to = %route, "navigating");
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
        self.transitions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn go_to_and_back() {
        let mut router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.can_go_back());

        router.go_to(Route::Browse);
        router.go_to(Route::Description("j1".to_string()));
        assert_eq!(router.current().path(), "/description/j1");
        assert_eq!(router.transitions(), 2);

        assert!(router.back());
        assert_eq!(router.current(), &Route::Browse);
        assert!(router.back());
        assert_eq!(router.current(), &Route::Home);
        assert!(!router.back());
        assert_eq!(router.transitions(), 4);
    }
}
