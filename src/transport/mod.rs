//! HTTP transport to the grading endpoint
//!
//! One POST per submission, JSON in and out, no retries. The transport is
//! a trait so the controller can be exercised against a stub.

use crate::constants::net;
use crate::protocol::{SubmissionRequest, SubmissionResponse};
use std::fmt;

/// A transport-level failure: the round-trip itself went wrong
///
/// Grading errors are not transport errors; they arrive inside a decoded
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection-level failure (DNS, refused, reset, ...)
    Network(String),
    /// The endpoint answered with a non-success status
    Status(u16),
    /// The body could not be decoded as a grading response
    Decode(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "network error: {msg}"),
            Self::Status(code) => write!(f, "endpoint returned status {code}"),
            Self::Decode(msg) => write!(f, "invalid response body: {msg}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// A way to deliver a submission and obtain the grading response
pub trait Transport: Send + Sync {
    fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResponse, TransportError>;
}

/// Resolve the handler URL for an endpoint base, once at startup
///
/// Mirrors the host runtime handing the widget a pre-resolved URL for the
/// `submit_query` handler.
pub fn resolve_handler_url(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("{base}/{}", net::SUBMIT_HANDLER)
}

/// The real HTTP transport
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpTransport {
    /// Create a transport aimed at a pre-resolved handler URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: url.into(),
        }
    }

    /// The handler URL this transport posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionResponse, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<SubmissionResponse>()
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
