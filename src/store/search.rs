//! Search query store.

use super::{Store, SubscriptionId};

/// The committed free-text job search query.
///
/// Defaults to the empty string, which readers treat as "no filter". Values are
/// stored exactly as given: no trimming, no validation.
#[derive(Debug, Default)]
pub struct SearchQueryStore {
    inner: Store<String>,
}

impl SearchQueryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored query.
    pub fn set_query(&mut self, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(query_len = value.len(), "search query committed");
        self.inner.set(value);
    }

    #[must_use]
    pub fn query(&self) -> &str {
        self.inner.get()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&String) + 'static,
    {
        self.inner.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.inner.unsubscribe(id)
    }
}
