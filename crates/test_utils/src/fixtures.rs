//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. Fixtures are consistent
//! and predictable; the invoice sets mirror the sample repair invoices
//! the demo UI ships with (bumper repair, water mitigation, glass).

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_claims::{EvidenceRef, IntakeRequest, LineItem};
use domain_policy::{CoverageType, PolicyTerms};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard collision deductible
    pub fn usd_deductible() -> Money {
        Money::new(dec!(500.00), Currency::USD)
    }

    /// Standard collision coverage cap
    pub fn usd_cap() -> Money {
        Money::new(dec!(25000.00), Currency::USD)
    }

    /// A zero USD amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// A EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for policy terms
pub struct PolicyFixtures;

impl PolicyFixtures {
    /// Collision terms: $500 deductible, $25,000 cap
    pub fn collision_terms() -> PolicyTerms {
        PolicyTerms::new(
            "POL-2024-78542",
            CoverageType::Collision,
            MoneyFixtures::usd_deductible(),
            MoneyFixtures::usd_cap(),
        )
        .expect("fixture terms are valid")
    }

    /// Property terms with a low cap: $1,000 deductible, $10,000 cap
    pub fn capped_property_terms() -> PolicyTerms {
        PolicyTerms::new(
            "POL-2024-11209",
            CoverageType::Property,
            Money::new(dec!(1000.00), Currency::USD),
            Money::new(dec!(10000.00), Currency::USD),
        )
        .expect("fixture terms are valid")
    }

    /// Glass terms with no deductible
    pub fn glass_terms() -> PolicyTerms {
        PolicyTerms::new(
            "POL-2024-10031",
            CoverageType::Glass,
            MoneyFixtures::usd_zero(),
            Money::new(dec!(1000.00), Currency::USD),
        )
        .expect("fixture terms are valid")
    }
}

/// Fixture for invoice line-item sets
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    /// Bumper repair: two covered items, one uncovered supplies charge
    ///
    /// Billed 2700, covered 2050.
    pub fn bumper_repair() -> Vec<LineItem> {
        vec![
            LineItem::new("Bumper Cover", Money::new(dec!(850.00), Currency::USD)).covered(),
            LineItem::new("Paint & Labor", Money::new(dec!(1200.00), Currency::USD)).covered(),
            LineItem::new("Misc Shop Supplies", Money::new(dec!(650.00), Currency::USD))
                .flagged("Shop supplies charge exceeds regional average"),
        ]
    }

    /// Storm roof replacement: everything covered, billed 12900
    pub fn roof_replacement() -> Vec<LineItem> {
        vec![
            LineItem::new("Roofing Materials", Money::new(dec!(5000.00), Currency::USD))
                .covered(),
            LineItem::new("Labor", Money::new(dec!(6400.00), Currency::USD)).covered(),
            LineItem::new("Debris Removal", Money::new(dec!(1500.00), Currency::USD)).covered(),
        ]
    }

    /// Single covered windshield line
    pub fn windshield_only() -> Vec<LineItem> {
        vec![LineItem::new("Windshield OEM", Money::new(dec!(320.00), Currency::USD)).covered()]
    }
}

/// Fixture for intake requests
pub struct IntakeFixtures;

impl IntakeFixtures {
    /// Description plus two photos
    pub fn collision_intake() -> IntakeRequest {
        IntakeRequest::new(
            "Front-end collision at a stop light; other driver admitted fault",
            vec![
                EvidenceRef::new("damage_front.jpg"),
                EvidenceRef::new("damage_side.jpg"),
            ],
        )
    }

    /// Evidence-only intake (voice note, no typed description)
    pub fn evidence_only_intake() -> IntakeRequest {
        IntakeRequest::new("", vec![EvidenceRef::new("voice_report.m4a")])
    }
}
