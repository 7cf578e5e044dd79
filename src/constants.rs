//! Shared constants

/// User-visible strings
pub mod ui {
    /// Verdict for a matching result set
    pub const VERDICT_CORRECT: &str = "Correct";
    /// Verdict for a non-matching result set
    pub const VERDICT_INCORRECT: &str = "Incorrect";
    /// Prefix for a grading error verdict
    pub const VERDICT_ERROR_PREFIX: &str = "Error: ";
    /// Message shown in a panel with no rows
    pub const EMPTY_RESULT: &str = "Empty result";
    /// Notification for a failed round-trip
    pub const SUBMIT_FAILED: &str = "Submission failed, please retry";
    /// Panel titles
    pub const EXPECTED_TITLE: &str = "Expected";
    pub const RESULT_TITLE: &str = "Result";
}

/// Endpoint wiring
pub mod net {
    /// Logical handler name resolved against the endpoint base URL
    pub const SUBMIT_HANDLER: &str = "submit_query";
}
