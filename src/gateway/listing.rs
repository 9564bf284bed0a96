//! Job listing gateway.

use super::{check_response, GatewayError, HttpOutcome, HttpRequest, RequestKind};
use crate::domain::JobSummary;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct JobsPayload {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    jobs: Option<Vec<JobSummary>>,
}

/// Client for the job service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobListingGateway {
    job_endpoint: String,
}

impl JobListingGateway {
    #[must_use]
    pub fn new(job_endpoint: impl Into<String>) -> Self {
        Self {
            job_endpoint: job_endpoint.into().trim_end_matches('/').to_string(),
        }
    }

    /// `GET {job_endpoint}/get?keyword={keyword}`.
    #[must_use]
    pub fn jobs_request(&self, keyword: &str, credentials: Option<&str>) -> HttpRequest {
        let url = format!("{}/get?keyword={}", self.job_endpoint, encode_query_value(keyword));
        HttpRequest::get(RequestKind::Jobs, url).with_credentials(credentials)
    }

    /// Converts the raw outcome of [`JobListingGateway::jobs_request`] into jobs.
    ///
    /// # Errors
    ///
    /// Same taxonomy as logout: transport, status, rejection, or a body that is
    /// not `{"success": true, "jobs": [...]}`.
    pub fn settle_jobs(outcome: HttpOutcome) -> Result<Vec<JobSummary>, GatewayError> {
        let response = check_response(outcome)?;

        let payload: JobsPayload = serde_json::from_slice(&response.body)
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        if payload.success != Some(true) {
            return Err(GatewayError::Rejected {
                message: payload.message,
            });
        }

        payload
            .jobs
            .ok_or_else(|| GatewayError::Malformed("missing jobs field".to_string()))
    }
}

/// Percent-encodes everything outside the RFC 3986 unreserved set.
fn encode_query_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(char::from(byte));
            }
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}
