//! Authentication gateway.
//!
//! Builds the logout request against the user service and settles its outcome
//! into a [`LogoutResult`]. A logout only counts as confirmed when the service
//! answers 2xx with `{"success": true, "message": "..."}`; every other shape is
//! a [`GatewayError`].

use super::{check_response, Envelope, GatewayError, HttpOutcome, HttpRequest, RequestKind};

/// Confirmation returned by a successful logout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoutReceipt {
    /// Human-readable message supplied by the service.
    pub message: String,
}

/// Settled outcome of a logout call.
pub type LogoutResult = std::result::Result<LogoutReceipt, GatewayError>;

/// Client for the user service's session endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGateway {
    user_endpoint: String,
    credentials: Option<String>,
}

impl AuthGateway {
    /// Creates a gateway for `user_endpoint` (e.g. `http://localhost:8000/api/v1/user`).
    #[must_use]
    pub fn new(user_endpoint: impl Into<String>, credentials: Option<String>) -> Self {
        Self {
            user_endpoint: user_endpoint.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    #[must_use]
    pub fn credentials(&self) -> Option<&str> {
        self.credentials.as_deref()
    }

    /// Replaces the session credentials, e.g. after an external login.
    pub fn set_credentials(&mut self, credentials: Option<String>) {
        self.credentials = credentials;
    }

    /// `GET {user_endpoint}/logout` with session credentials attached.
    #[must_use]
    pub fn logout_request(&self) -> HttpRequest {
        HttpRequest::get(RequestKind::Logout, format!("{}/logout", self.user_endpoint))
            .with_credentials(self.credentials())
    }

    /// Converts the raw outcome of [`AuthGateway::logout_request`] into a result.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::Transport`] when no response arrived
    /// - [`GatewayError::Status`] for non-2xx responses
    /// - [`GatewayError::Malformed`] when the body is not the expected JSON or
    ///   lacks the `message` field
    /// - [`GatewayError::Rejected`] when `success` is missing or `false`
    pub fn settle_logout(outcome: HttpOutcome) -> LogoutResult {
        let response = check_response(outcome)?;

        let envelope: Envelope = serde_json::from_slice(&response.body)
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        if envelope.success != Some(true) {
            return Err(GatewayError::Rejected {
                message: envelope.message,
            });
        }

        let message = envelope
            .message
            .ok_or_else(|| GatewayError::Malformed("missing message field".to_string()))?;

        Ok(LogoutReceipt { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::HttpResponse;

    fn ok_body(body: &str) -> HttpOutcome {
        Ok(HttpResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        })
    }

    #[test]
    fn logout_request_targets_logout_path_with_cookie() {
        let gateway = AuthGateway::new("http://localhost:8000/api/v1/user/", Some("token=t1".into()));
        let request = gateway.logout_request();

        assert_eq!(request.kind, RequestKind::Logout);
        assert_eq!(request.url, "http://localhost:8000/api/v1/user/logout");
        assert_eq!(request.headers.get("Cookie").map(String::as_str), Some("token=t1"));
    }

    #[test]
    fn success_payload_settles_ok() {
        let result = AuthGateway::settle_logout(ok_body(r#"{"success":true,"message":"Logged out"}"#));
        assert_eq!(
            result,
            Ok(LogoutReceipt {
                message: "Logged out".to_string()
            })
        );
    }

    #[test]
    fn success_false_is_rejection_with_message() {
        let result = AuthGateway::settle_logout(ok_body(r#"{"success":false,"message":"Nope"}"#));
        assert_eq!(
            result,
            Err(GatewayError::Rejected {
                message: Some("Nope".to_string())
            })
        );
    }

    #[test]
    fn missing_success_flag_is_rejection() {
        let result = AuthGateway::settle_logout(ok_body(r#"{"message":"Logged out"}"#));
        assert!(matches!(result, Err(GatewayError::Rejected { .. })));
    }

    #[test]
    fn missing_message_is_malformed() {
        let result = AuthGateway::settle_logout(ok_body(r#"{"success":true}"#));
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let result = AuthGateway::settle_logout(ok_body("<html>502 Bad Gateway</html>"));
        assert!(matches!(result, Err(GatewayError::Malformed(_))));
    }

    #[test]
    fn server_error_without_body_has_no_message() {
        let result = AuthGateway::settle_logout(Ok(HttpResponse {
            status: 500,
            body: Vec::new(),
        }));
        let err = result.unwrap_err();
        assert_eq!(err, GatewayError::Status { status: 500, message: None });
        assert_eq!(err.user_message("Logout failed"), "Logout failed");
    }

    #[test]
    fn transport_failure_is_reported() {
        let result = AuthGateway::settle_logout(Err("connection refused".to_string()));
        assert_eq!(result, Err(GatewayError::Transport("connection refused".to_string())));
    }

    #[test]
    fn credentials_can_be_replaced() {
        let mut gateway = AuthGateway::new("http://h/user", None);
        assert!(gateway.credentials().is_none());
        gateway.set_credentials(Some("token=x".to_string()));
        assert_eq!(gateway.credentials(), Some("token=x"));
    }
}
