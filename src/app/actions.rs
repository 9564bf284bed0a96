//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to the host directly. It returns a
//! `Vec<Action>` after each event and the plugin runtime executes them in
//! order.
//!
//! # Example
//!
//! ```
//! use hirepoint::app::Action;
//! use hirepoint::gateway::{HttpRequest, RequestKind};
//!
//! let actions = vec![
//!     Action::SendRequest(HttpRequest::get(RequestKind::Jobs, "http://localhost:8000/api/v1/job/get?keyword=")),
//!     Action::ScheduleTick { seconds: 1.0 },
//! ];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::gateway::HttpRequest;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (e.g., pressing 'q').
    CloseFocus,

    /// Issues an HTTP request through the host.
    ///
    /// The request's [`RequestKind`](crate::gateway::RequestKind) travels in
    /// the request context so the response can be routed back as a
    /// `ResponseReceived` event.
    SendRequest(HttpRequest),

    /// Asks the host for a timer event after `seconds`.
    ///
    /// Drives notification expiry.
    ScheduleTick {
        /// Delay before the `Tick` event.
        seconds: f64,
    },
}
