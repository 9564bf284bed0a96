//! Shared client-side state containers.
//!
//! Every piece of state that more than one view reads lives in a [`Store`]: an
//! explicit, injectable value container with subscribe/notify semantics. Stores
//! are created when the plugin loads, owned by [`crate::app::AppState`], and
//! handed by reference to the components that read or write them. They are
//! dropped with the plugin.
//!
//! # Modules
//!
//! - [`session`]: The signed-in user ([`SessionStore`])
//! - [`search`]: The committed search query ([`SearchQueryStore`])
//! - [`jobs`]: Job postings supplied by the listing service ([`JobStore`])
//!
//! # Example
//!
//! ```
//! use hirepoint::store::Store;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut store = Store::new(0_u32);
//!
//! let sink = Rc::clone(&seen);
//! store.subscribe(move |value| sink.borrow_mut().push(*value));
//! store.set(7);
//!
//! assert_eq!(*store.get(), 7);
//! assert_eq!(*seen.borrow(), vec![7]);
//! ```

pub mod jobs;
pub mod search;
pub mod session;

pub use jobs::JobStore;
pub use search::SearchQueryStore;
pub use session::SessionStore;

use std::fmt;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Observable value container.
///
/// Writes replace the value and notify every subscriber once, in subscription
/// order, with the new value. Reads never notify. Everything runs on the plugin
/// thread, so no locking is involved.
pub struct Store<T> {
    value: T,
    subscribers: Vec<(SubscriptionId, Subscriber<T>)>,
    next_id: u64,
}

impl<T> Store<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the stored value and notifies subscribers.
    pub fn set(&mut self, value: T) {
        self.value = value;
        for (_, callback) in &mut self.subscribers {
            callback(&self.value);
        }
    }

    /// Registers a callback invoked after every [`Store::set`].
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Removes a subscription. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.subscribers.len() != before
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Default> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_subscribers_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new(String::new());

        let first = Rc::clone(&log);
        store.subscribe(move |v: &String| first.borrow_mut().push(format!("a:{v}")));
        let second = Rc::clone(&log);
        store.subscribe(move |v: &String| second.borrow_mut().push(format!("b:{v}")));

        store.set("x".to_string());

        assert_eq!(*log.borrow(), vec!["a:x", "b:x"]);
    }

    #[test]
    fn unsubscribed_callbacks_are_not_invoked() {
        let hits = Rc::new(RefCell::new(0));
        let mut store = Store::new(1_i32);

        let counter = Rc::clone(&hits);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.set(2);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set(3);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
        assert_eq!(*store.get(), 3);
    }

    #[test]
    fn reads_do_not_notify() {
        let hits = Rc::new(RefCell::new(0));
        let mut store = Store::new(5_u8);
        let counter = Rc::clone(&hits);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        let _ = store.get();
        let _ = store.get();

        assert_eq!(*hits.borrow(), 0);
    }
}
