//! Domain-specific error types and error handling.
//!
//! Every failure the booking engine can surface maps to one of the kinds
//! below. Errors are logged once at the detection site and propagated
//! unchanged; the API layer owns the mapping to HTTP status codes.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A referenced resource (room, booking) does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Malformed input such as an inverted date range or an unknown status
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// A business-rule conflict: room unavailable for the requested dates,
    /// or a cancellation attempted after check-in
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// The caller lacks ownership or a privileged role for the booking
    #[error("Forbidden: {message}")]
    Forbidden { message: String },

    /// Storage-layer failure surfaced by a repository implementation
    #[error("Database error: {message}")]
    Database { message: String },

    /// Unexpected internal failure
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Create a `NotFound` error for a named resource
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a `Validation` error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a `Conflict` error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a `Forbidden` error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Create a `Database` error
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    /// Stable error code for programmatic handling in API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Conflict { .. } => "CONFLICT",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = DomainError::not_found("room");
        assert_eq!(error.to_string(), "Resource not found: room");
        assert_eq!(error.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            DomainError::not_found("x"),
            DomainError::validation("x"),
            DomainError::conflict("x"),
            DomainError::forbidden("x"),
            DomainError::database("x"),
            DomainError::Internal {
                message: "x".to_string(),
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.error_code()).collect();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }
}
