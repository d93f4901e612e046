//! Domain Errors
//!
//! Validation errors are shown to the user; everything else is logged.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Rejected input for the add-item operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    /// Name is empty after trimming
    EmptyName,
    /// Price is missing, not a number, zero or negative
    InvalidPrice,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Please enter an item name"),
            ValidationError::InvalidPrice => write!(f, "Price must be a positive number"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    Validation(ValidationError),
    Storage(String),
    Serialization(String),
}

impl DomainError {
    /// True when the error should be surfaced to the user
    pub fn is_validation(&self) -> bool {
        matches!(self, DomainError::Validation(_))
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(err) => write!(f, "{}", err),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
            DomainError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        DomainError::Validation(err)
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}
