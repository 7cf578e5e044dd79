//! Wire types for the grading endpoint
//!
//! One request shape, one response shape, and the tagged verdict the
//! response resolves into. The verdict decision is made exactly once here;
//! rendering code never branches on optional response fields.

use crate::constants::ui;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of a query result set: an ordered sequence of opaque scalars
pub type Row = Vec<Value>;

/// Request body for a submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRequest {
    pub query: String,
}

impl SubmissionRequest {
    /// Build a request from the editor content, sent as-is
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Response body from the grading endpoint
///
/// Every field defaults when absent and unknown fields are ignored; the
/// live service attaches extras (e.g. the verification query) that the
/// widget has no use for.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SubmissionResponse {
    /// True iff the submitted query's result set matches the expected one
    #[serde(default)]
    pub comparison: bool,
    /// Set iff the query failed to execute; `comparison` is then untrusted
    #[serde(default)]
    pub error: Option<String>,
    /// The reference result set
    #[serde(default)]
    pub expected: Vec<Row>,
    /// The result set produced by the submitted query
    #[serde(default)]
    pub result: Vec<Row>,
}

/// Grading outcome, resolved once at the response boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The query failed to execute; message is surfaced verbatim
    Error(String),
    /// The query executed; `correct` is the comparison outcome
    Graded { correct: bool },
}

impl Verdict {
    /// Resolve a response into a verdict
    ///
    /// The error field is authoritative and checked first. An empty error
    /// string counts as absent, matching the service's truthiness rules.
    pub fn resolve(response: &SubmissionResponse) -> Self {
        match response.error.as_deref() {
            Some(message) if !message.is_empty() => Verdict::Error(message.to_string()),
            _ => Verdict::Graded {
                correct: response.comparison,
            },
        }
    }

    /// The verdict line shown to the student
    pub fn text(&self) -> String {
        match self {
            Verdict::Error(message) => format!("{}{}", ui::VERDICT_ERROR_PREFIX, message),
            Verdict::Graded { correct: true } => ui::VERDICT_CORRECT.to_string(),
            Verdict::Graded { correct: false } => ui::VERDICT_INCORRECT.to_string(),
        }
    }

    /// Whether the verdict region gets error styling
    pub fn is_error(&self) -> bool {
        matches!(self, Verdict::Error(_))
    }
}

/// Textual form of one result cell
///
/// Strings render bare (no quotes), null renders empty, and every other
/// scalar renders as its JSON text. The value is treated as plain text all
/// the way to the screen; nothing downstream interprets it.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
