//! Policy terms and coverage taxonomy
//!
//! `PolicyTerms` is the slice of a policy the claims lifecycle needs:
//! which coverage applies, how much the policyholder retains
//! (deductible), and how much the policy will pay at most (cap).
//!
//! # Invariants
//!
//! - Deductible and cap are non-negative
//! - The cap is at least the deductible
//! - Both amounts share one currency

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, PolicyId};

use crate::error::PolicyError;

/// Types of coverage a claim can draw on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoverageType {
    /// Collision with another vehicle or object
    Collision,
    /// Non-collision loss (theft, weather, animal strike)
    Comprehensive,
    /// Liability toward third parties
    Liability,
    /// Property damage (homeowner lines)
    Property,
    /// Glass-only coverage
    Glass,
    /// Product-specific coverage
    Custom(String),
}

/// The policy terms in force for a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyTerms {
    /// Unique identifier
    pub id: PolicyId,
    /// Policy number (human-readable)
    pub policy_number: String,
    /// Coverage the claim draws on
    pub coverage_type: CoverageType,
    /// Amount the policyholder pays before coverage applies
    pub deductible: Money,
    /// Maximum the policy pays out, regardless of billed total
    pub max_coverage: Money,
}

impl PolicyTerms {
    /// Creates validated policy terms
    ///
    /// # Errors
    ///
    /// Returns `PolicyError::InvalidTerms` naming the violated field if
    /// the deductible is negative, the cap is below the deductible, the
    /// currencies differ, or the policy number is empty.
    pub fn new(
        policy_number: impl Into<String>,
        coverage_type: CoverageType,
        deductible: Money,
        max_coverage: Money,
    ) -> Result<Self, PolicyError> {
        let terms = Self {
            id: PolicyId::new_v7(),
            policy_number: policy_number.into(),
            coverage_type,
            deductible,
            max_coverage,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// Validates the terms as a unit
    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.policy_number.trim().is_empty() {
            return Err(PolicyError::invalid_terms(
                "policy_number",
                "must not be empty",
            ));
        }
        if self.deductible.is_negative() {
            return Err(PolicyError::invalid_terms(
                "deductible",
                format!("must be non-negative, got {}", self.deductible),
            ));
        }
        if self.max_coverage.is_negative() {
            return Err(PolicyError::invalid_terms(
                "max_coverage",
                format!("must be non-negative, got {}", self.max_coverage),
            ));
        }
        if self.deductible.currency() != self.max_coverage.currency() {
            return Err(PolicyError::invalid_terms(
                "max_coverage",
                format!(
                    "currency {} does not match deductible currency {}",
                    self.max_coverage.currency(),
                    self.deductible.currency()
                ),
            ));
        }
        if self.max_coverage < self.deductible {
            return Err(PolicyError::invalid_terms(
                "max_coverage",
                format!(
                    "cap {} is below deductible {}",
                    self.max_coverage, self.deductible
                ),
            ));
        }
        Ok(())
    }

    /// Returns the currency the terms are denominated in
    pub fn currency(&self) -> Currency {
        self.deductible.currency()
    }
}
