//! First Notice of Loss intake
//!
//! An intake is admissible when the claimant has described the incident
//! or attached at least one piece of evidence. Evidence refs are opaque
//! handles produced by the upload collaborator; this domain never opens
//! the files.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::EvidenceId;

use crate::error::ClaimError;

/// Reference to an uploaded evidence file (photo, video, voice note)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceRef {
    /// Unique identifier
    pub id: EvidenceId,
    /// File name as submitted
    pub file_name: String,
}

impl EvidenceRef {
    /// Creates a new evidence reference
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            id: EvidenceId::new_v7(),
            file_name: file_name.into(),
        }
    }
}

/// Intake data as submitted by the claimant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntakeRequest {
    /// Free-text incident description
    pub description: String,
    /// Attached evidence files
    pub evidence: Vec<EvidenceRef>,
}

impl IntakeRequest {
    /// Creates an intake request
    pub fn new(description: impl Into<String>, evidence: Vec<EvidenceRef>) -> Self {
        Self {
            description: description.into(),
            evidence,
        }
    }

    /// Creates a description-only intake request
    pub fn from_description(description: impl Into<String>) -> Self {
        Self::new(description, Vec::new())
    }

    /// Checks that the intake carries enough to open a claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` when the description is blank
    /// and no evidence is attached.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.description.trim().is_empty() && self.evidence.is_empty() {
            return Err(ClaimError::validation(
                "intake requires an incident description or at least one evidence file",
            ));
        }
        Ok(())
    }

    /// Converts into the record stored on the claim
    pub fn into_record(self) -> IntakeRecord {
        IntakeRecord {
            description: self.description,
            evidence: self.evidence,
            submitted_at: Utc::now(),
        }
    }
}

/// Intake data as stored on an opened claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeRecord {
    /// Free-text incident description
    pub description: String,
    /// Attached evidence files
    pub evidence: Vec<EvidenceRef>,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}
