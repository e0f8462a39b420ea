//! Claims Lifecycle Domain
//!
//! This crate implements the claim lifecycle from First Notice of Loss
//! (FNOL) through triage, investigation, settlement computation, and
//! authorized closure.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Intake -> Triage -> Investigation -> Settlement -> Closed
//! ```
//!
//! Stages advance strictly forward; the only way back is a full reset,
//! which discards the claim and starts a fresh one at Intake.

pub mod claim;
pub mod error;
pub mod events;
pub mod intake;
pub mod investigation;
pub mod invoice;
pub mod settlement;
pub mod triage;
pub mod wizard;

pub use claim::{Claim, ClaimStage};
pub use error::ClaimError;
pub use events::ClaimEvent;
pub use intake::{EvidenceRef, IntakeRecord, IntakeRequest};
pub use investigation::{ChecklistItem, ChecklistStatus, InvestigationReport, Severity};
pub use invoice::LineItem;
pub use settlement::{calculate, SettlementRecord};
pub use triage::{Complexity, TriageAssessment};
pub use wizard::{ClaimWizard, Confirmations};
