//! Error types for `pytracker-core`.

use thiserror::Error;

/// Primary error type for tracking service operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    // === Authentication Errors ===
    /// Login with an unknown email or a rejected password.
    ///
    /// Deliberately does not say which, so the caller cannot probe the
    /// directory through login failures.
    #[error("Invalid credentials")]
    InvalidCredentials,

    // === Lookup Errors ===
    /// Project with the specified ID was not found.
    #[error("Project not found: {id}")]
    ProjectNotFound { id: String },

    /// Ticket with the specified ID was not found.
    #[error("Ticket not found: {id}")]
    TicketNotFound { id: String },

    // === Uniqueness Errors ===
    /// Registration with an email already present in the directory.
    #[error("Email already registered: {email}")]
    EmailTaken { email: String },

    /// Project creation with a key already in use.
    #[error("Project key already in use: {key}")]
    KeyTaken { key: String },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid priority value.
    #[error("Invalid priority: {priority}")]
    InvalidPriority { priority: String },
}

impl TrackerError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `TrackerError`.
pub type Result<T> = std::result::Result<T, TrackerError>;
