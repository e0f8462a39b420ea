//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use proptest::prelude::*;

use core_kernel::{Currency, Money};
use domain_claims::LineItem;
use domain_policy::{CoverageType, PolicyTerms};

/// Strategy for non-negative amounts in minor units
pub fn amount_minor_strategy() -> impl Strategy<Value = i64> {
    0i64..100_000_000i64
}

/// Strategy for a single USD line item with a random covered flag
pub fn line_item_strategy() -> impl Strategy<Value = LineItem> {
    (amount_minor_strategy(), any::<bool>(), "[a-zA-Z ]{1,24}").prop_map(
        |(minor, covered, description)| {
            let item = LineItem::new(
                format!("Charge {}", description.trim()),
                Money::from_minor(minor, Currency::USD),
            );
            if covered {
                item.covered()
            } else {
                item
            }
        },
    )
}

/// Strategy for a non-empty line-item set
pub fn line_items_strategy() -> impl Strategy<Value = Vec<LineItem>> {
    prop::collection::vec(line_item_strategy(), 1..16)
}

/// Strategy for valid policy terms (cap always at least the deductible)
pub fn policy_terms_strategy() -> impl Strategy<Value = PolicyTerms> {
    (amount_minor_strategy(), amount_minor_strategy()).prop_map(|(deductible, headroom)| {
        PolicyTerms::new(
            "POL-PROP-0001",
            CoverageType::Collision,
            Money::from_minor(deductible, Currency::USD),
            Money::from_minor(deductible.saturating_add(headroom), Currency::USD),
        )
        .expect("generated terms satisfy the invariants")
    })
}
