//! End-to-end wizard flow tests
//!
//! These tests replay whole claim-handling sessions the way the
//! wizard's caller would, from first notice of loss to authorized
//! closure, and verify the audit trail left behind.

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_claims::{
    ChecklistItem, ClaimError, ClaimEvent, ClaimStage, ClaimWizard, Complexity, Confirmations,
    IntakeRequest, InvestigationReport, LineItem, Severity, TriageAssessment,
};
use test_utils::{assert_settlement_balances, assert_stage, InvoiceFixtures, PolicyFixtures};

fn usd(amount: rust_decimal::Decimal) -> Money {
    Money::new(amount, Currency::USD)
}

/// A complete session: intake, triage, investigation, settlement,
/// authorization.
#[test]
fn test_full_claim_session() {
    let wizard = ClaimWizard::new();

    // Step 1: first notice of loss
    let claim = wizard
        .submit_intake(
            IntakeRequest::from_description(
                "Front-end collision, 2022 Toyota Camry, other driver ran a red light",
            ),
            PolicyFixtures::collision_terms(),
        )
        .unwrap();
    assert_stage(&claim, ClaimStage::Triage);

    // Step 2: triage scoring and adjuster assignment
    let assessment = TriageAssessment::new(18, 92, Complexity::Low, "Alex Morgan")
        .unwrap()
        .with_reasoning("Consistent narrative, no prior claims in 5 years");
    let claim = wizard.record_triage(claim, assessment).unwrap();
    assert!(!claim.triage.as_ref().unwrap().needs_senior_review());

    let claim = wizard.advance(claim, ClaimStage::Investigation).unwrap();
    assert_stage(&claim, ClaimStage::Investigation);

    // Step 3: investigation findings and analyzed invoice
    let report = InvestigationReport::new(
        Severity::Minor,
        "Adverse carrier accepted 100% liability",
        "Straightforward bumper repair. Subrogation potential high.",
    )
    .with_checklist(vec![ChecklistItem::pending("Collect subrogation packet")]);
    let claim = wizard.record_investigation(claim, report).unwrap();

    let claim = wizard
        .attach_invoice(
            claim,
            Some("AutoFix Collision Center".to_string()),
            InvoiceFixtures::bumper_repair(),
        )
        .unwrap();

    // Step 4: settlement computation and authorization
    let claim = wizard.compute_settlement(claim).unwrap();
    assert_stage(&claim, ClaimStage::Settlement);

    let record = claim.settlement.as_ref().unwrap();
    assert_settlement_balances(record);
    assert_eq!(record.insurer_pays, usd(dec!(1550)));
    assert_eq!(record.customer_pays, usd(dec!(1150)));
    assert_eq!(record.not_covered(), usd(dec!(650)));

    let claim = wizard.authorize(claim, Confirmations::both()).unwrap();
    assert_stage(&claim, ClaimStage::Closed);
}

/// The audit trail records every lifecycle event in order.
#[test]
fn test_audit_trail_is_complete_and_ordered() {
    let wizard = ClaimWizard::new();

    let claim = wizard
        .submit_intake(
            IntakeRequest::from_description("Hail damage across hood and roof"),
            PolicyFixtures::collision_terms(),
        )
        .unwrap();
    let assessment = TriageAssessment::new(9, 97, Complexity::Low, "Dana Reyes").unwrap();
    let claim = wizard.record_triage(claim, assessment).unwrap();
    let claim = wizard.advance(claim, ClaimStage::Investigation).unwrap();
    let claim = wizard
        .attach_invoice(claim, None, InvoiceFixtures::windshield_only())
        .unwrap();
    let claim = wizard.compute_settlement(claim).unwrap();
    let claim = wizard.authorize(claim, Confirmations::both()).unwrap();

    let kinds: Vec<&'static str> = claim
        .events
        .iter()
        .map(|event| match event {
            ClaimEvent::ClaimOpened { .. } => "opened",
            ClaimEvent::StageAdvanced { .. } => "advanced",
            ClaimEvent::TriageRecorded { .. } => "triage",
            ClaimEvent::InvoiceAttached { .. } => "invoice",
            ClaimEvent::InvestigationRecorded { .. } => "investigation",
            ClaimEvent::SettlementComputed { .. } => "settlement",
            ClaimEvent::ClaimAuthorized { .. } => "authorized",
        })
        .collect();

    assert_eq!(
        kinds,
        vec![
            "opened", "advanced", // Intake -> Triage
            "triage", "advanced", // Triage -> Investigation
            "invoice", "settlement", "advanced", // Investigation -> Settlement
            "authorized", "advanced", // Settlement -> Closed
        ]
    );

    // Timestamps never move backwards
    let timestamps: Vec<_> = claim.events.iter().map(|e| e.timestamp()).collect();
    assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

/// Re-uploading a corrected invoice starts a new computation cycle.
#[test]
fn test_upload_different_invoice_cycle() {
    let wizard = ClaimWizard::new();

    let claim = wizard
        .submit_intake(
            IntakeRequest::from_description("Burst pipe, kitchen flooring damage"),
            PolicyFixtures::capped_property_terms(),
        )
        .unwrap();
    let claim = wizard.advance(claim, ClaimStage::Investigation).unwrap();

    // First invoice includes a charge the analysis rejects as uncovered
    let claim = wizard
        .attach_invoice(
            claim,
            Some("DryFast Mitigation LLC".to_string()),
            vec![
                LineItem::new("Water Extraction", usd(dec!(1200))).covered(),
                LineItem::new("Dehumidifier Rental (7 days)", usd(dec!(1500)))
                    .flagged("Rental duration inconsistent with square footage dried"),
                LineItem::new("Flooring Replacement", usd(dec!(2500))).covered(),
            ],
        )
        .unwrap();

    // The shop re-issues the invoice with the rental reduced and covered
    let claim = wizard
        .attach_invoice(
            claim,
            Some("DryFast Mitigation LLC".to_string()),
            vec![
                LineItem::new("Water Extraction", usd(dec!(1200))).covered(),
                LineItem::new("Dehumidifier Rental (4 days)", usd(dec!(860))).covered(),
                LineItem::new("Flooring Replacement", usd(dec!(2500))).covered(),
            ],
        )
        .unwrap();
    assert!(claim.settlement.is_none());

    let claim = wizard.compute_settlement(claim).unwrap();
    let record = claim.settlement.as_ref().unwrap();

    assert_eq!(record.total_billed, usd(dec!(4560)));
    assert_eq!(record.total_covered, usd(dec!(4560)));
    assert_eq!(record.deductible_applied, usd(dec!(1000)));
    assert_eq!(record.insurer_pays, usd(dec!(3560)));
    assert_eq!(record.customer_pays, usd(dec!(1000)));
    assert_settlement_balances(record);
}

/// A session abandoned mid-flow resets to a brand-new intake claim.
#[test]
fn test_restart_discards_the_session() {
    let wizard = ClaimWizard::new();

    let claim = wizard
        .submit_intake(
            IntakeRequest::from_description("Tools stolen from vehicle"),
            PolicyFixtures::collision_terms(),
        )
        .unwrap();
    let claim = wizard.advance(claim, ClaimStage::Investigation).unwrap();
    let claim = wizard
        .attach_invoice(claim, None, InvoiceFixtures::bumper_repair())
        .unwrap();
    let claim = wizard.compute_settlement(claim).unwrap();
    let old_id = claim.id;

    // "Start New Claim": the old value is simply dropped
    let fresh = wizard.reset();
    assert_stage(&fresh, ClaimStage::Intake);
    assert_ne!(fresh.id, old_id);
    assert!(fresh.settlement.is_none());
    assert!(fresh.events.is_empty());
}

/// Rejection paths: skips, missing confirmations, empty intake.
#[test]
fn test_rejection_scenarios() {
    let wizard = ClaimWizard::new();

    // submitIntake("", []) fails
    assert!(matches!(
        wizard.submit_intake(
            IntakeRequest::new("", Vec::new()),
            PolicyFixtures::collision_terms()
        ),
        Err(ClaimError::Validation(_))
    ));

    // advance(intake-stage claim, Investigation) skips Triage
    let session = wizard.reset();
    assert!(matches!(
        wizard.advance(session, ClaimStage::Investigation),
        Err(ClaimError::InvalidTransition {
            from: ClaimStage::Intake,
            to: ClaimStage::Investigation,
        })
    ));

    // authorize with one confirmation missing
    let claim = wizard
        .submit_intake(
            IntakeRequest::from_description("Deer strike on highway 9"),
            PolicyFixtures::collision_terms(),
        )
        .unwrap();
    let claim = wizard.advance(claim, ClaimStage::Investigation).unwrap();
    let claim = wizard
        .attach_invoice(claim, None, InvoiceFixtures::windshield_only())
        .unwrap();
    let claim = wizard.compute_settlement(claim).unwrap();
    assert!(matches!(
        wizard.authorize(
            claim,
            Confirmations {
                accurate: true,
                reviewed: false
            }
        ),
        Err(ClaimError::Authorization(_))
    ));
}
