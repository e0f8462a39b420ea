//! Claim wizard service
//!
//! The wizard is the single entry point for moving a claim through its
//! lifecycle. It is stateless: every operation consumes a claim value
//! and returns the updated one, so the caller always holds the one
//! source of truth. The caller serializes operations per claim; the
//! wizard provides no internal synchronization.
//!
//! Transitions that must carry data go through their dedicated
//! operations (`submit_intake`, `compute_settlement`, `authorize`);
//! `advance` covers the remaining step and rejects everything else.

use tracing::{info, warn};

use domain_policy::PolicyTerms;

use crate::claim::{Claim, ClaimStage};
use crate::error::ClaimError;
use crate::events::ClaimEvent;
use crate::intake::IntakeRequest;
use crate::investigation::InvestigationReport;
use crate::invoice::{validate_line_items, LineItem};
use crate::settlement;
use crate::triage::TriageAssessment;

/// The two confirmations required to authorize a settlement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confirmations {
    /// "This settlement is accurate and within policy limits"
    pub accurate: bool,
    /// "I have reviewed the invoice analysis and coverage details"
    pub reviewed: bool,
}

impl Confirmations {
    /// Both boxes ticked
    pub fn both() -> Self {
        Self {
            accurate: true,
            reviewed: true,
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.accurate {
            missing.push("accurate");
        }
        if !self.reviewed {
            missing.push("reviewed");
        }
        missing
    }
}

/// Drives the ordered progression through claim-handling stages
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaimWizard;

impl ClaimWizard {
    /// Creates a wizard
    pub fn new() -> Self {
        Self
    }

    /// Opens a claim from intake data, landing in Triage
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Validation` when the intake carries neither
    /// a description nor evidence, or `ClaimError::InvalidInput` when
    /// the policy terms are malformed.
    pub fn submit_intake(
        &self,
        intake: IntakeRequest,
        policy: PolicyTerms,
    ) -> Result<Claim, ClaimError> {
        intake.validate()?;
        policy.validate()?;

        let claim = Claim::open(intake.into_record(), policy);
        info!(claim = %claim.id, stage = %claim.stage, "claim opened from intake");
        Ok(claim)
    }

    /// Attaches the triage assessment while in Triage
    pub fn record_triage(
        &self,
        mut claim: Claim,
        assessment: TriageAssessment,
    ) -> Result<Claim, ClaimError> {
        self.require_stage(&claim, ClaimStage::Triage, "record a triage assessment")?;

        claim.record_event(ClaimEvent::TriageRecorded {
            fraud_score: assessment.fraud_score,
            recommended_adjuster: assessment.recommended_adjuster.clone(),
            timestamp: chrono::Utc::now(),
        });
        claim.triage = Some(assessment);
        Ok(claim)
    }

    /// Advances the claim one stage forward
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::InvalidTransition` when `target` skips a
    /// stage or regresses, and `ClaimError::Precondition` when the
    /// transition must travel through a dedicated operation instead.
    pub fn advance(&self, mut claim: Claim, target: ClaimStage) -> Result<Claim, ClaimError> {
        if !claim.can_transition_to(target) {
            warn!(
                claim = %claim.id,
                from = %claim.stage,
                to = %target,
                "rejected stage transition"
            );
            return Err(ClaimError::InvalidTransition {
                from: claim.stage,
                to: target,
            });
        }

        match target {
            ClaimStage::Triage => Err(ClaimError::precondition(
                "intake has not been submitted; open the claim with submit_intake",
            )),
            ClaimStage::Settlement => Err(ClaimError::precondition(
                "the settlement has not been computed; use compute_settlement",
            )),
            ClaimStage::Closed => Err(ClaimError::precondition(
                "closure requires authorization; use authorize",
            )),
            _ => {
                claim.advance_to(target)?;
                info!(claim = %claim.id, stage = %claim.stage, "stage advanced");
                Ok(claim)
            }
        }
    }

    /// Attaches analyzed invoice line items while in Investigation
    ///
    /// Replaces any previously attached items and discards any prior
    /// settlement, starting a new computation cycle ("upload a
    /// different invoice").
    pub fn attach_invoice(
        &self,
        mut claim: Claim,
        vendor: Option<String>,
        items: Vec<LineItem>,
    ) -> Result<Claim, ClaimError> {
        self.require_stage(&claim, ClaimStage::Investigation, "attach an invoice")?;

        let currency = validate_line_items(&items)?;
        if let Some(policy_currency) = claim.currency() {
            if currency != policy_currency {
                return Err(ClaimError::invalid_input(
                    "currency",
                    format!("invoice is denominated in {currency}, policy in {policy_currency}"),
                ));
            }
        }

        claim.record_event(ClaimEvent::InvoiceAttached {
            item_count: items.len(),
            timestamp: chrono::Utc::now(),
        });
        claim.vendor = vendor;
        claim.line_items = items;
        claim.settlement = None;
        Ok(claim)
    }

    /// Files the adjuster's investigation report while in Investigation
    pub fn record_investigation(
        &self,
        mut claim: Claim,
        report: InvestigationReport,
    ) -> Result<Claim, ClaimError> {
        self.require_stage(&claim, ClaimStage::Investigation, "file an investigation report")?;

        claim.record_event(ClaimEvent::InvestigationRecorded {
            timestamp: chrono::Utc::now(),
        });
        claim.investigation = Some(report);
        Ok(claim)
    }

    /// Computes the settlement and transitions to Settlement
    ///
    /// The settlement is computed exactly once per
    /// Investigation -> Settlement transition; a fresh computation
    /// requires a new invoice (`attach_invoice`) or a reset.
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Precondition` when the claim is not in
    /// Investigation or carries no line items, and passes through the
    /// calculator's `InvalidInput` errors.
    pub fn compute_settlement(&self, mut claim: Claim) -> Result<Claim, ClaimError> {
        self.require_stage(&claim, ClaimStage::Investigation, "compute the settlement")?;

        let policy = claim.policy.as_ref().ok_or_else(|| {
            ClaimError::precondition("no policy terms attached; submit intake first")
        })?;
        if claim.line_items.is_empty() {
            return Err(ClaimError::precondition(
                "no invoice line items attached; attach an analyzed invoice first",
            ));
        }

        let record = settlement::calculate(policy, &claim.line_items)?;
        info!(
            claim = %claim.id,
            settlement = %record.id,
            insurer_pays = %record.insurer_pays,
            customer_pays = %record.customer_pays,
            "settlement computed"
        );

        claim.record_event(ClaimEvent::SettlementComputed {
            settlement_id: record.id,
            insurer_pays: record.insurer_pays,
            timestamp: record.computed_at,
        });
        claim.settlement = Some(record);
        claim.advance_to(ClaimStage::Settlement)?;
        Ok(claim)
    }

    /// Authorizes the settlement and closes the claim
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::Authorization` naming the missing
    /// confirmation(s); the caller re-prompts the user. Not logged as a
    /// system error.
    pub fn authorize(
        &self,
        mut claim: Claim,
        confirmations: Confirmations,
    ) -> Result<Claim, ClaimError> {
        self.require_stage(&claim, ClaimStage::Settlement, "authorize the settlement")?;

        let missing = confirmations.missing();
        if !missing.is_empty() {
            return Err(ClaimError::authorization(format!(
                "missing confirmation(s): {}",
                missing.join(", ")
            )));
        }

        claim.record_event(ClaimEvent::ClaimAuthorized {
            timestamp: chrono::Utc::now(),
        });
        claim.advance_to(ClaimStage::Closed)?;
        info!(claim = %claim.id, "claim authorized and closed");
        Ok(claim)
    }

    /// Discards the current claim and starts a fresh session at Intake
    pub fn reset(&self) -> Claim {
        Claim::session()
    }

    fn require_stage(
        &self,
        claim: &Claim,
        stage: ClaimStage,
        operation: &str,
    ) -> Result<(), ClaimError> {
        if claim.stage != stage {
            warn!(
                claim = %claim.id,
                stage = %claim.stage,
                required = %stage,
                "operation attempted in wrong stage"
            );
            return Err(ClaimError::precondition(format!(
                "cannot {operation} in stage {}; claim must be in {stage}",
                claim.stage
            )));
        }
        Ok(())
    }
}
