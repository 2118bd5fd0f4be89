//! Error types for the innkeep library.
//!
//! This module provides the error hierarchy for all booking-engine
//! operations, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with an innkeep error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the innkeep library.
///
/// Workflow operations fail fast with exactly one of the domain variants
/// (`Validation`, `NotFound`, `Conflict`, `Unauthenticated`); the remaining
/// variants cover the persistence and configuration layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or missing input (non-chronological dates, zero guests).
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A booking, room, or property lookup failed.
    ///
    /// Authorization failures surface as `NotFound` as well, so callers
    /// cannot distinguish "does not exist" from "not yours".
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// Availability or capacity violated, or an illegal status transition.
    #[error("conflict: {details}")]
    Conflict {
        /// Details about the conflict.
        details: String,
    },

    /// No valid actor identity was supplied.
    #[error("unauthenticated: no actor identity")]
    Unauthenticated,

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Constructs a `NotFound` error for the given resource description.
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Constructs a `Conflict` error with the given details.
    #[must_use]
    pub fn conflict(details: impl Into<String>) -> Self {
        Self::Conflict {
            details: details.into(),
        }
    }

    /// Constructs a `Validation` error for the given field.
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is a not-found (or authorization) failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this error is a conflict (capacity or state-machine) failure.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<crate::status::TransitionError> for Error {
    fn from(err: crate::status::TransitionError) -> Self {
        Self::Conflict {
            details: err.to_string(),
        }
    }
}
