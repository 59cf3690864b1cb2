//! Error types for startup metrics.
//!
//! This module defines the error types used throughout the metrics crate.

use thiserror::Error;

/// Result type for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;

/// Errors that can occur while deriving or aggregating startup metrics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A record field violates a precondition of a computation.
    #[error("Invalid input for startup '{id}': {field} {reason}")]
    InvalidInput {
        /// The startup ID.
        id: String,
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Missing required field during construction.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// Two records in one roster share an ID.
    #[error("Duplicate startup id '{id}'")]
    DuplicateId {
        /// The repeated ID.
        id: String,
    },

    /// No startup with the requested ID.
    #[error("Unknown startup '{id}'")]
    UnknownStartup {
        /// The requested ID.
        id: String,
    },

    /// The roster has no startups to select from.
    #[error("Roster has no startups")]
    EmptyRoster,
}

impl MetricsError {
    /// Create an invalid input error.
    #[must_use]
    pub fn invalid_input(
        id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidInput {
            id: id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Create a duplicate id error.
    #[must_use]
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }

    /// Create an unknown startup error.
    #[must_use]
    pub fn unknown_startup(id: impl Into<String>) -> Self {
        Self::UnknownStartup { id: id.into() }
    }

    /// Returns true for errors caused by a single record's field values.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
