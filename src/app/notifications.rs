//! Transient user-visible feedback.
//!
//! Components report outcomes through a [`NotificationSink`]. The plugin's sink
//! is [`Toasts`], a short queue whose entries expire after a configured number
//! of seconds and are shown one at a time above the footer.

use std::collections::VecDeque;

/// Maximum number of notifications kept at once; older ones are dropped.
const MAX_TOASTS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    /// Unix timestamp (seconds) when the notification was raised.
    pub created_at: i64,
}

/// Accepts `(kind, message)` feedback.
pub trait NotificationSink {
    fn notify(&mut self, kind: NotificationKind, message: String);
}

/// Expiring notification queue.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: VecDeque<Notification>,
    ttl_seconds: i64,
}

impl Toasts {
    #[must_use]
    pub fn new(ttl_seconds: u32) -> Self {
        Self {
            items: VecDeque::new(),
            ttl_seconds: i64::from(ttl_seconds),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Most recent notification still alive.
    #[must_use]
    pub fn latest(&self) -> Option<&Notification> {
        self.items.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    #[must_use]
    pub const fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// Drops notifications older than the TTL at `now`. Returns whether any were dropped.
    pub fn expire_at(&mut self, now: i64) -> bool {
        let before = self.items.len();
        let ttl = self.ttl_seconds;
        self.items.retain(|item| now - item.created_at < ttl);
        before != self.items.len()
    }

    pub fn expire(&mut self) -> bool {
        self.expire_at(chrono::Utc::now().timestamp())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl NotificationSink for Toasts {
    fn notify(&mut self, kind: NotificationKind, message: String) {
        match kind {
            NotificationKind::Success => tracing::info!(message = %message, "notification"),
            NotificationKind::Error => tracing::warn!(message = %message, "error notification"),
        }
        if self.items.len() == MAX_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Notification {
            kind,
            message,
            created_at: chrono::Utc::now().timestamp(),
        });
    }
}
