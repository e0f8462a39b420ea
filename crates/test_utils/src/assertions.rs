//! Custom Test Assertions
//!
//! Assertion helpers for domain types that give more meaningful error
//! messages than standard assertions.

use core_kernel::Money;
use domain_claims::{Claim, ClaimStage, SettlementRecord};

/// Asserts that two Money values are equal, reporting both on failure
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={actual}, expected={expected}"
    );
}

/// Asserts the settlement conservation law and amount signs
pub fn assert_settlement_balances(record: &SettlementRecord) {
    assert!(
        record.balances(),
        "Settlement does not balance: customer_pays={} + insurer_pays={} != total_billed={}",
        record.customer_pays,
        record.insurer_pays,
        record.total_billed
    );
    for (name, amount) in [
        ("total_billed", record.total_billed),
        ("total_covered", record.total_covered),
        ("deductible_applied", record.deductible_applied),
        ("customer_pays", record.customer_pays),
        ("insurer_pays", record.insurer_pays),
    ] {
        assert!(
            !amount.is_negative(),
            "Settlement field {name} is negative: {amount}"
        );
    }
}

/// Asserts the claim sits in the expected stage
pub fn assert_stage(claim: &Claim, expected: ClaimStage) {
    assert_eq!(
        claim.stage, expected,
        "Claim {} is in stage {}, expected {}",
        claim.id, claim.stage, expected
    );
}
