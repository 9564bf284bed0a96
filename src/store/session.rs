//! Session store holding the signed-in user.

use super::{Store, SubscriptionId};
use crate::domain::{SessionState, User};

/// Shared session state.
///
/// [`SessionStore::set_user`] is the only way to change who is signed in.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: Store<SessionState>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `Some(user)` authenticates, `None` returns to anonymous.
    pub fn set_user(&mut self, user: Option<User>) {
        let state = SessionState::from(user);
        tracing::debug!(authenticated = state.is_authenticated(), role = ?state.role(), "session changed");
        self.inner.set(state);
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.inner.get().user()
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        self.inner.get()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&SessionState) + 'static,
    {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_anonymous() {
        let store = SessionStore::new();
        assert_eq!(store.user(), None);
        assert_eq!(store.state(), &SessionState::Anonymous);
    }

    #[test]
    fn set_user_round_trips_and_clears() {
        let mut store = SessionStore::new();
        let user = User::new("u1", "Asha", Role::Student);

        store.set_user(Some(user.clone()));
        assert_eq!(store.user(), Some(&user));
        assert_eq!(store.user(), Some(&user));
        assert!(store.state().is_authenticated());

        store.set_user(None);
        assert_eq!(store.user(), None);
        assert!(!store.state().is_authenticated());
    }

    #[test]
    fn subscribers_observe_logout() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = SessionStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.is_authenticated()));

        store.set_user(Some(User::new("u1", "Asha", Role::Student)));
        store.set_user(None);

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
