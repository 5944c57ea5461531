//! Error types for the wayfarer library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{PlanId, PlanStatus};

/// Error type for every fallible wayfarer operation.
///
/// The store's core operations (add, lookup, views, update, delete) never
/// produce one of these; they come from the form layer, checked status
/// transitions, the session, and seed loading.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: PlanId },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Status change outside the plan lifecycle
    #[error("Plan {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: PlanId,
        from: PlanStatus,
        to: PlanStatus,
    },
    /// Profile operations need a signed-in user
    #[error("No user is signed in")]
    NotSignedIn,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WayfarerError {
        WayfarerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl WayfarerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns the offending field name for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            WayfarerError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias for wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
