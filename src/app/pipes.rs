//! Pipe messages from the HirePoint web app.
//!
//! The web application signs users in; it hands the session to the plugin
//! over Zellij pipes:
//!
//! - `hirepoint::login` with a JSON payload `{"user": {...}, "cookie": "..."}`
//! - `hirepoint::session-expired` with no payload

use serde::Deserialize;

use super::handler::Event;
use crate::domain::{Result, User};

pub const LOGIN_PIPE: &str = "hirepoint::login";
pub const SESSION_EXPIRED_PIPE: &str = "hirepoint::session-expired";

#[derive(Debug, Deserialize)]
struct LoginPayload {
    user: User,
    #[serde(default)]
    cookie: Option<String>,
}

/// Maps a pipe message to an event.
///
/// Returns `Ok(None)` for pipes that do not belong to this plugin.
///
/// # Errors
///
/// Returns [`crate::HirepointError::Json`] when a login payload is missing or
/// malformed.
pub fn event_from_pipe(name: &str, payload: Option<&str>) -> Result<Option<Event>> {
    match name {
        LOGIN_PIPE => {
            let login: LoginPayload = serde_json::from_str(payload.unwrap_or_default())?;
            Ok(Some(Event::SessionStarted {
                user: login.user,
                credentials: login.cookie.filter(|cookie| !cookie.trim().is_empty()),
            }))
        }
        SESSION_EXPIRED_PIPE => Ok(Some(Event::SessionExpired)),
        _ => Ok(None),
    }
}
