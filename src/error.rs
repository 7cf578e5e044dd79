//! Centralized error handling
//! Defines the structured application error used below the binary boundary

use std::fmt;

/// Category of the error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// File system or I/O errors
    Io,
    /// Terminal backend errors
    Term,
    /// Network or endpoint errors
    Transport,
    /// Internal logic or invariant violations
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Term => write!(f, "Term"),
            Self::Transport => write!(f, "Transport"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// A structured error in querypad
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// What kind of error occurred
    pub kind: ErrorKind,
    /// Machine-readable error code (e.g., "POLL_FAILED")
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl AppError {
    /// Create a new error
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if the message contains a substring (useful for tests)
    pub fn contains_msg(&self, sub: &str) -> bool {
        self.message.contains(sub)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<String> for AppError {
    fn from(msg: String) -> Self {
        Self::new(ErrorKind::Internal, "GENERIC_ERROR", msg)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, "IO_ERROR", err.to_string())
    }
}

/// Result alias for querypad operations
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
