//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/store/gateway layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── ResponseReceived ←── web_request
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode state machine
//! - [`state`]: Central application state container and view model computation
//! - [`navigator`]: Route transitions and back history
//! - [`notifications`]: Expiring success/error notifications
//! - [`navbar`]: Role-aware navigation, account menu and logout
//! - [`hero`]: Landing-page search draft
//! - [`feed`]: Latest-jobs cards
//! - [`browse`]: Search results and full job list
//! - [`selection`]: Wrapping list cursor
//! - [`pipes`]: Session handoff messages from the web app

pub mod actions;
pub mod browse;
pub mod feed;
pub mod handler;
pub mod hero;
pub mod modes;
pub mod navbar;
pub mod navigator;
pub mod notifications;
pub mod pipes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use navbar::NavigationBar;
pub use navigator::{Navigator, Router};
pub use notifications::{Notification, NotificationKind, NotificationSink, Toasts};
pub use pipes::event_from_pipe;
pub use state::AppState;
