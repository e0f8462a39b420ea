//! Claims domain errors
//!
//! One error type covers the whole lifecycle. Variants map to how the
//! caller recovers: `Validation` and `Authorization` go back to the
//! user for more input, `InvalidInput` names the field to correct,
//! `InvalidTransition` and `Precondition` indicate caller bugs and are
//! logged by the wizard. Nothing is retried automatically.

use thiserror::Error;

use core_kernel::MoneyError;
use domain_policy::PolicyError;

use crate::claim::ClaimStage;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Intake data insufficient; the user must supply more input
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Attempted stage skip or regression
    #[error("Invalid stage transition from {from} to {to}")]
    InvalidTransition { from: ClaimStage, to: ClaimStage },

    /// Operation attempted without required prior-stage data
    #[error("Precondition not met: {0}")]
    Precondition(String),

    /// Malformed policy or line-item data, naming the violated field
    #[error("Invalid input ({field}): {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Closure attempted without both confirmations
    #[error("Authorization incomplete: {0}")]
    Authorization(String),

    /// Money arithmetic error (currency mismatch)
    #[error(transparent)]
    Money(#[from] MoneyError),
}

impl ClaimError {
    /// Creates a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }

    /// Creates a precondition error
    pub fn precondition(message: impl Into<String>) -> Self {
        ClaimError::Precondition(message.into())
    }

    /// Creates an invalid-input error naming the violated field
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        ClaimError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an authorization error
    pub fn authorization(message: impl Into<String>) -> Self {
        ClaimError::Authorization(message.into())
    }

    /// Returns the violated field for input errors
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ClaimError::InvalidInput { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<PolicyError> for ClaimError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::InvalidTerms { field, reason } => {
                ClaimError::InvalidInput { field, reason }
            }
            PolicyError::MissingRequiredField(field) => {
                ClaimError::Validation(format!("missing required field: {field}"))
            }
        }
    }
}
