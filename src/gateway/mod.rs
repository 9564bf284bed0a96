//! Remote service gateways.
//!
//! The plugin never performs network I/O itself. Gateways build [`HttpRequest`]
//! descriptions that the plugin runtime hands to Zellij's `web_request`, and
//! settle the raw [`HttpResponse`] that comes back into typed results. The
//! request kind travels in the request context so responses can be matched to
//! their continuation.
//!
//! ```text
//! handler → Action::SendRequest(HttpRequest) → runtime → web_request
//!                                                            │
//! handler ← Event::ResponseReceived { kind, outcome } ←──────┘
//! ```
//!
//! # Modules
//!
//! - [`auth`]: Session logout against the user service
//! - [`listing`]: Job postings from the job service

pub mod auth;
pub mod listing;

pub use auth::{AuthGateway, LogoutReceipt, LogoutResult};
pub use listing::JobListingGateway;

use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Context key carrying the [`RequestKind`] through the host.
pub const REQUEST_KIND_KEY: &str = "hirepoint_request";

/// Which continuation a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Logout,
    Jobs,
}

impl RequestKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Logout => "logout",
            Self::Jobs => "jobs",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "logout" => Some(Self::Logout),
            "jobs" => Some(Self::Jobs),
            _ => None,
        }
    }
}

/// An outgoing GET request for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub kind: RequestKind,
    pub url: String,
    pub headers: BTreeMap<String, String>,
}

impl HttpRequest {
    #[must_use]
    pub fn get(kind: RequestKind, url: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        Self {
            kind,
            url: url.into(),
            headers,
        }
    }

    /// Attaches session credentials as a `Cookie` header.
    #[must_use]
    pub fn with_credentials(mut self, cookie: Option<&str>) -> Self {
        if let Some(cookie) = cookie {
            self.headers.insert("Cookie".to_string(), cookie.to_string());
        }
        self
    }

    /// Context map round-tripped by the host alongside the response.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_KIND_KEY.to_string(), self.kind.as_str().to_string());
        context
    }
}

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Either a response or a transport-level failure reason.
pub type HttpOutcome = std::result::Result<HttpResponse, String>;

/// Why a gateway call did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status.
    #[error("service returned status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    /// The service answered but declined the operation.
    #[error("service rejected the request")]
    Rejected { message: Option<String> },

    /// The body was not the expected JSON shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Server-supplied message, if the failure carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } | Self::Rejected { message } => message.as_deref(),
            Self::Transport(_) | Self::Malformed(_) => None,
        }
    }

    /// Message to show the user: the server's, or `fallback` when there is none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

/// Envelope shared by every service response: `{ "success": bool, "message": string }`.
///
/// Both fields are optional here so a missing field can be reported instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// Best-effort extraction of `message` from an error body.
fn message_from_body(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Envelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
}

/// Shared first stage of settling: transport and status checks.
fn check_response(outcome: HttpOutcome) -> std::result::Result<HttpResponse, GatewayError> {
    let response = outcome.map_err(GatewayError::Transport)?;
    if !response.is_success() {
        return Err(GatewayError::Status {
            status: response.status,
            message: message_from_body(&response.body),
        });
    }
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_kind_round_trips_through_context() {
        let request = HttpRequest::get(RequestKind::Jobs, "http://x/job/get");
        let context = request.context();
        let kind = context.get(REQUEST_KIND_KEY).and_then(|v| RequestKind::parse(v));
        assert_eq!(kind, Some(RequestKind::Jobs));
    }

    #[test]
    fn credentials_are_optional() {
        let bare = HttpRequest::get(RequestKind::Logout, "u").with_credentials(None);
        assert!(!bare.headers.contains_key("Cookie"));

        let authed = HttpRequest::get(RequestKind::Logout, "u").with_credentials(Some("token=abc"));
        assert_eq!(authed.headers.get("Cookie").map(String::as_str), Some("token=abc"));
    }

    #[test]
    fn user_message_falls_back_when_missing_or_blank() {
        let with = GatewayError::Rejected {
            message: Some("Session not found".to_string()),
        };
        let blank = GatewayError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        let transport = GatewayError::Transport("connection refused".to_string());

        assert_eq!(with.user_message("fallback"), "Session not found");
        assert_eq!(blank.user_message("fallback"), "fallback");
        assert_eq!(transport.user_message("fallback"), "fallback");
    }

    #[test]
    fn check_response_reads_error_message_from_body() {
        let outcome = Ok(HttpResponse {
            status: 401,
            body: br#"{"success":false,"message":"User not authenticated"}"#.to_vec(),
        });

        let err = check_response(outcome).unwrap_err();
        assert_eq!(err.server_message(), Some("User not authenticated"));
    }
}
