//! Claim aggregate
//!
//! The Claim is the consistency boundary for one wizard session.
//!
//! # Invariants
//!
//! - The stage only moves forward, one step at a time
//! - Intake and policy are populated from Triage onward
//! - The settlement exists only from Settlement onward and is replaced
//!   solely by a new computation cycle (invoice re-upload before the
//!   Settlement stage, or a full reset)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Currency};
use domain_policy::PolicyTerms;

use crate::error::ClaimError;
use crate::events::ClaimEvent;
use crate::intake::IntakeRecord;
use crate::investigation::InvestigationReport;
use crate::invoice::LineItem;
use crate::settlement::SettlementRecord;
use crate::triage::TriageAssessment;

/// Claim lifecycle stages, in order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ClaimStage {
    /// Collecting FNOL data; nothing submitted yet
    Intake,
    /// Scoring and adjuster assignment
    Triage,
    /// Adjuster investigation and invoice analysis
    Investigation,
    /// Settlement awaiting human authorization
    Settlement,
    /// Authorized and paid; terminal
    Closed,
}

impl ClaimStage {
    /// All stages in lifecycle order
    pub const ALL: [ClaimStage; 5] = [
        ClaimStage::Intake,
        ClaimStage::Triage,
        ClaimStage::Investigation,
        ClaimStage::Settlement,
        ClaimStage::Closed,
    ];

    /// Zero-based position in the lifecycle
    pub fn position(&self) -> usize {
        match self {
            ClaimStage::Intake => 0,
            ClaimStage::Triage => 1,
            ClaimStage::Investigation => 2,
            ClaimStage::Settlement => 3,
            ClaimStage::Closed => 4,
        }
    }

    /// The next stage, or None from the terminal stage
    pub fn next(&self) -> Option<ClaimStage> {
        ClaimStage::ALL.get(self.position() + 1).copied()
    }

    /// Whether this is the terminal stage
    pub fn is_terminal(&self) -> bool {
        *self == ClaimStage::Closed
    }
}

impl fmt::Display for ClaimStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ClaimStage::Intake => "Intake",
            ClaimStage::Triage => "Triage",
            ClaimStage::Investigation => "Investigation",
            ClaimStage::Settlement => "Settlement",
            ClaimStage::Closed => "Closed",
        };
        write!(f, "{name}")
    }
}

/// A claim moving through the wizard lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// Claim number (human-readable)
    pub claim_number: String,
    /// Current lifecycle stage
    pub stage: ClaimStage,
    /// Intake record; populated by submission
    pub intake: Option<IntakeRecord>,
    /// Policy terms in force; populated by submission
    pub policy: Option<PolicyTerms>,
    /// Triage assessment, once recorded
    pub triage: Option<TriageAssessment>,
    /// Investigation report, once filed
    pub investigation: Option<InvestigationReport>,
    /// Repair vendor named on the invoice
    pub vendor: Option<String>,
    /// Invoice line items
    pub line_items: Vec<LineItem>,
    /// Settlement record, once computed
    pub settlement: Option<SettlementRecord>,
    /// Audit trail
    pub events: Vec<ClaimEvent>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates an empty session claim at Intake
    ///
    /// This is the claim a fresh wizard session (or a reset) starts
    /// with: nothing collected, nothing computed.
    pub fn session() -> Self {
        let now = Utc::now();
        Self {
            id: ClaimId::new_v7(),
            claim_number: generate_claim_number(),
            stage: ClaimStage::Intake,
            intake: None,
            policy: None,
            triage: None,
            investigation: None,
            vendor: None,
            line_items: Vec::new(),
            settlement: None,
            events: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Opens a claim from a validated intake, landing in Triage
    pub fn open(intake: IntakeRecord, policy: PolicyTerms) -> Self {
        let mut claim = Self::session();
        claim.intake = Some(intake);
        claim.policy = Some(policy);
        claim.record_event(ClaimEvent::ClaimOpened {
            claim_id: claim.id,
            timestamp: claim.created_at,
        });
        claim
            .advance_to(ClaimStage::Triage)
            .expect("Intake -> Triage is always a valid transition");
        claim
    }

    /// Whether `target` is the one valid next stage
    pub fn can_transition_to(&self, target: ClaimStage) -> bool {
        self.stage.next() == Some(target)
    }

    /// Moves to `target`, which must be exactly the next stage
    pub(crate) fn advance_to(&mut self, target: ClaimStage) -> Result<(), ClaimError> {
        if !self.can_transition_to(target) {
            return Err(ClaimError::InvalidTransition {
                from: self.stage,
                to: target,
            });
        }
        let from = self.stage;
        self.stage = target;
        self.record_event(ClaimEvent::StageAdvanced {
            from,
            to: target,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    /// Appends to the audit trail and bumps the updated timestamp
    pub(crate) fn record_event(&mut self, event: ClaimEvent) {
        self.updated_at = event.timestamp();
        self.events.push(event);
    }

    /// Currency of the attached policy, if any
    pub fn currency(&self) -> Option<Currency> {
        self.policy.as_ref().map(|p| p.currency())
    }

    /// Total billed across the attached line items
    pub fn total_billed(&self) -> Option<core_kernel::Money> {
        let currency = self.line_items.first()?.billed_amount.currency();
        Some(
            self.line_items
                .iter()
                .fold(core_kernel::Money::zero(currency), |acc, item| {
                    acc + item.billed_amount
                }),
        )
    }
}

fn generate_claim_number() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("CLM-{}", duration.as_millis() % 10_000_000_000)
}
