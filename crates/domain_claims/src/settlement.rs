//! Settlement computation
//!
//! Pure, deterministic reconciliation of an analyzed invoice against
//! the policy terms: covered charges are summed, capped at the policy
//! limit, reduced by the deductible, and the remainder split between
//! insurer and customer.
//!
//! # Invariants
//!
//! - `customer_pays + insurer_pays == total_billed`, exactly
//! - `total_covered <= max_coverage`
//! - `deductible_applied <= min(deductible, total_covered)`
//! - every amount is non-negative

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Money, SettlementId};
use domain_policy::PolicyTerms;

use crate::error::ClaimError;
use crate::invoice::{validate_line_items, LineItem};

/// The computed payout breakdown
///
/// Derived data: created once per Investigation -> Settlement
/// transition and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier
    pub id: SettlementId,
    /// Sum of all billed line items
    pub total_billed: Money,
    /// Sum of covered line items, capped at the policy limit
    pub total_covered: Money,
    /// Deductible actually applied (never more than what is covered)
    pub deductible_applied: Money,
    /// Customer's share: uncovered charges plus the deductible
    pub customer_pays: Money,
    /// Insurer's share: covered charges less the deductible
    pub insurer_pays: Money,
    /// When the settlement was computed
    pub computed_at: DateTime<Utc>,
}

impl SettlementRecord {
    /// Returns the currency of the settlement
    pub fn currency(&self) -> Currency {
        self.total_billed.currency()
    }

    /// Billed amount that falls outside coverage
    pub fn not_covered(&self) -> Money {
        self.total_billed - self.total_covered
    }

    /// Conservation check: the two shares exactly cover the bill
    pub fn balances(&self) -> bool {
        (self.customer_pays + self.insurer_pays) == self.total_billed
    }
}

/// Computes the settlement breakdown for an analyzed invoice
///
/// # Errors
///
/// Returns `ClaimError::InvalidInput` naming the violated field when
/// the line items are empty or malformed, when policy terms are
/// invalid, or when items and policy disagree on currency. Errors are
/// surfaced to the caller for correction; nothing is retried.
pub fn calculate(
    policy: &PolicyTerms,
    items: &[LineItem],
) -> Result<SettlementRecord, ClaimError> {
    policy.validate()?;
    let currency = validate_line_items(items)?;
    if currency != policy.currency() {
        return Err(ClaimError::invalid_input(
            "currency",
            format!(
                "invoice is denominated in {currency}, policy in {}",
                policy.currency()
            ),
        ));
    }

    let zero = Money::zero(currency);
    let mut total_billed = zero;
    let mut raw_covered = zero;
    for item in items {
        total_billed = total_billed.checked_add(&item.billed_amount)?;
        if item.covered {
            raw_covered = raw_covered.checked_add(&item.billed_amount)?;
        }
    }

    let total_covered = raw_covered.capped_at(&policy.max_coverage)?;
    let deductible_applied = policy.deductible.capped_at(&total_covered)?;
    let insurer_pays = total_covered.checked_sub(&deductible_applied)?;
    let customer_pays = total_billed.checked_sub(&insurer_pays)?;

    Ok(SettlementRecord {
        id: SettlementId::new_v7(),
        total_billed,
        total_covered,
        deductible_applied,
        customer_pays,
        insurer_pays,
        computed_at: Utc::now(),
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use domain_policy::CoverageType;
    use proptest::prelude::*;

    fn arb_items() -> impl Strategy<Value = Vec<LineItem>> {
        prop::collection::vec(
            (0i64..5_000_000i64, any::<bool>()).prop_map(|(minor, covered)| {
                let item = LineItem::new("Line", Money::from_minor(minor, Currency::USD));
                if covered {
                    item.covered()
                } else {
                    item
                }
            }),
            1..12,
        )
    }

    fn arb_policy() -> impl Strategy<Value = PolicyTerms> {
        (0i64..1_000_000i64, 0i64..10_000_000i64).prop_map(|(deductible, headroom)| {
            PolicyTerms::new(
                "POL-PROP-1",
                CoverageType::Collision,
                Money::from_minor(deductible, Currency::USD),
                Money::from_minor(deductible + headroom, Currency::USD),
            )
            .unwrap()
        })
    }

    proptest! {
        #[test]
        fn conservation_holds(policy in arb_policy(), items in arb_items()) {
            let record = calculate(&policy, &items).unwrap();
            prop_assert!(record.balances());
            prop_assert_eq!(
                record.customer_pays + record.insurer_pays,
                record.total_billed
            );
        }

        #[test]
        fn all_amounts_non_negative(policy in arb_policy(), items in arb_items()) {
            let record = calculate(&policy, &items).unwrap();
            prop_assert!(!record.total_billed.is_negative());
            prop_assert!(!record.total_covered.is_negative());
            prop_assert!(!record.deductible_applied.is_negative());
            prop_assert!(!record.customer_pays.is_negative());
            prop_assert!(!record.insurer_pays.is_negative());
        }

        #[test]
        fn cap_is_enforced(policy in arb_policy(), items in arb_items()) {
            let record = calculate(&policy, &items).unwrap();
            prop_assert!(record.total_covered <= policy.max_coverage);
        }

        #[test]
        fn deductible_is_bounded(policy in arb_policy(), items in arb_items()) {
            let record = calculate(&policy, &items).unwrap();
            prop_assert!(record.deductible_applied <= policy.deductible);
            prop_assert!(record.deductible_applied <= record.total_covered);
        }
    }
}
