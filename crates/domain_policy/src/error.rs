//! Policy domain errors

use thiserror::Error;

/// Errors that can occur when validating policy terms
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    /// A field on the terms holds a value the domain rejects
    #[error("Invalid policy terms ({field}): {reason}")]
    InvalidTerms { field: &'static str, reason: String },

    /// Required field is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
}

impl PolicyError {
    /// Creates an invalid-terms error naming the violated field
    pub fn invalid_terms(field: &'static str, reason: impl Into<String>) -> Self {
        PolicyError::InvalidTerms {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the violated field, if this error names one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            PolicyError::InvalidTerms { field, .. } => Some(field),
            PolicyError::MissingRequiredField(_) => None,
        }
    }
}
