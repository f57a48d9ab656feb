//! Custom error types for Pocketbook
//!
//! This module defines the crate-level error hierarchy using thiserror.
//! Model-specific validation enums convert into [`PocketbookError`] so callers
//! only ever need to match on two domain failure kinds: a value outside its
//! allowed domain (`Validation`) or a value of the wrong type (`InvalidType`).

use thiserror::Error;

use crate::models::budget::BudgetValidationError;
use crate::models::category::CategoryValidationError;
use crate::models::entry::EntryValidationError;
use crate::models::status::StatusParseError;

/// The main error type for Pocketbook operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PocketbookError {
    /// A value lies outside its allowed domain
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value has the wrong type for the field it was given to
    #[error("Invalid type for '{field}': expected {expected}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl PocketbookError {
    /// Create a "not found" error for entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a type error
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<CategoryValidationError> for PocketbookError {
    fn from(err: CategoryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BudgetValidationError> for PocketbookError {
    fn from(err: BudgetValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<StatusParseError> for PocketbookError {
    fn from(err: StatusParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<EntryValidationError> for PocketbookError {
    fn from(err: EntryValidationError) -> Self {
        match err {
            EntryValidationError::WrongType { field, expected } => {
                Self::InvalidType { field, expected }
            }
            other => Self::Validation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for PocketbookError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PocketbookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Pocketbook operations
pub type PocketbookResult<T> = Result<T, PocketbookError>;
