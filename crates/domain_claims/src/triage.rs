//! Triage assessment
//!
//! The assessment is produced by an external scoring service (or a
//! human claims manager) and attached to the claim during the Triage
//! stage. This domain validates score bounds and stores the record; it
//! never computes a fraud score itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Claim complexity as judged at triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Externally-supplied triage scoring record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageAssessment {
    /// Fraud likelihood score, 0..=100
    pub fraud_score: u8,
    /// Narrative behind the fraud score
    pub fraud_reasoning: Option<String>,
    /// Complexity band
    pub complexity: Complexity,
    /// Adjuster the triage recommends for assignment
    pub recommended_adjuster: String,
    /// Scorer's confidence, 0..=100
    pub confidence: u8,
    /// When the assessment was produced
    pub assessed_at: DateTime<Utc>,
}

impl TriageAssessment {
    /// Creates a bounds-checked assessment
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidInput` when either score exceeds 100.
    pub fn new(
        fraud_score: u8,
        confidence: u8,
        complexity: Complexity,
        recommended_adjuster: impl Into<String>,
    ) -> Result<Self, ClaimError> {
        if fraud_score > 100 {
            return Err(ClaimError::invalid_input(
                "fraud_score",
                format!("must be within 0..=100, got {fraud_score}"),
            ));
        }
        if confidence > 100 {
            return Err(ClaimError::invalid_input(
                "confidence",
                format!("must be within 0..=100, got {confidence}"),
            ));
        }
        Ok(Self {
            fraud_score,
            fraud_reasoning: None,
            complexity,
            recommended_adjuster: recommended_adjuster.into(),
            confidence,
            assessed_at: Utc::now(),
        })
    }

    /// Attaches the scorer's narrative
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.fraud_reasoning = Some(reasoning.into());
        self
    }

    /// High fraud score or high complexity warrants senior review
    pub fn needs_senior_review(&self) -> bool {
        self.fraud_score >= 70 || self.complexity == Complexity::High
    }
}
