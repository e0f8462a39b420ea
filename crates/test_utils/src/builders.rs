//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults,
//! so tests specify only the fields they care about.

use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rust_decimal::Decimal;

use core_kernel::{Currency, Money};
use domain_claims::{
    Claim, ClaimStage, ClaimWizard, Confirmations, IntakeRequest, LineItem,
};
use domain_policy::{CoverageType, PolicyTerms};

use crate::fixtures::InvoiceFixtures;

/// Builder for policy terms
pub struct TestPolicyTermsBuilder {
    policy_number: String,
    coverage_type: CoverageType,
    deductible: Money,
    max_coverage: Money,
}

impl Default for TestPolicyTermsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyTermsBuilder {
    /// Creates a builder with collision defaults
    pub fn new() -> Self {
        Self {
            policy_number: "POL-2024-78542".to_string(),
            coverage_type: CoverageType::Collision,
            deductible: Money::new(Decimal::new(500, 0), Currency::USD),
            max_coverage: Money::new(Decimal::new(25000, 0), Currency::USD),
        }
    }

    /// Sets the policy number
    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.policy_number = number.into();
        self
    }

    /// Sets the coverage type
    pub fn with_coverage_type(mut self, coverage_type: CoverageType) -> Self {
        self.coverage_type = coverage_type;
        self
    }

    /// Sets the deductible in minor units
    pub fn with_deductible_minor(mut self, minor: i64) -> Self {
        self.deductible = Money::from_minor(minor, Currency::USD);
        self
    }

    /// Sets the coverage cap in minor units
    pub fn with_cap_minor(mut self, minor: i64) -> Self {
        self.max_coverage = Money::from_minor(minor, Currency::USD);
        self
    }

    /// Builds the terms, panicking on invalid combinations
    pub fn build(self) -> PolicyTerms {
        PolicyTerms::new(
            self.policy_number,
            self.coverage_type,
            self.deductible,
            self.max_coverage,
        )
        .expect("test policy terms must be valid")
    }
}

/// Builder for invoice line items
pub struct TestLineItemBuilder {
    description: String,
    billed_minor: i64,
    covered: bool,
    flag: Option<String>,
}

impl Default for TestLineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLineItemBuilder {
    /// Creates a builder with a generated description
    pub fn new() -> Self {
        Self {
            description: Sentence(2..5).fake(),
            billed_minor: 45_000,
            covered: false,
            flag: None,
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the billed amount in minor units
    pub fn with_billed_minor(mut self, minor: i64) -> Self {
        self.billed_minor = minor;
        self
    }

    /// Marks the item covered
    pub fn covered(mut self) -> Self {
        self.covered = true;
        self
    }

    /// Attaches an anomaly flag
    pub fn with_flag(mut self, note: impl Into<String>) -> Self {
        self.flag = Some(note.into());
        self
    }

    /// Builds the line item
    pub fn build(self) -> LineItem {
        let mut item = LineItem::new(
            self.description,
            Money::from_minor(self.billed_minor, Currency::USD),
        );
        if self.covered {
            item = item.covered();
        }
        if let Some(note) = self.flag {
            item = item.flagged(note);
        }
        item
    }
}

/// Builder that drives a claim to a target stage through the wizard
pub struct TestClaimBuilder {
    policy: PolicyTerms,
    description: String,
    vendor: Option<String>,
    items: Vec<LineItem>,
    stage: ClaimStage,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder targeting the Triage stage with defaults
    pub fn new() -> Self {
        Self {
            policy: TestPolicyTermsBuilder::new().build(),
            description: Sentence(4..9).fake(),
            vendor: Some(CompanyName().fake()),
            items: InvoiceFixtures::bumper_repair(),
            stage: ClaimStage::Triage,
        }
    }

    /// Sets the policy terms
    pub fn with_policy(mut self, policy: PolicyTerms) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the intake description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the invoice line items attached during Investigation
    pub fn with_items(mut self, items: Vec<LineItem>) -> Self {
        self.items = items;
        self
    }

    /// Sets the target stage to drive the claim to
    pub fn in_stage(mut self, stage: ClaimStage) -> Self {
        self.stage = stage;
        self
    }

    /// Builds the claim by replaying wizard operations
    ///
    /// Panics if the defaults cannot reach the target stage (e.g. an
    /// empty item set with a Settlement target).
    pub fn build(self) -> Claim {
        let wizard = ClaimWizard::new();

        if self.stage == ClaimStage::Intake {
            return wizard.reset();
        }

        let mut claim = wizard
            .submit_intake(
                IntakeRequest::from_description(self.description),
                self.policy,
            )
            .expect("test intake must be valid");
        if self.stage == ClaimStage::Triage {
            return claim;
        }

        claim = wizard
            .advance(claim, ClaimStage::Investigation)
            .expect("Triage -> Investigation");
        if self.stage == ClaimStage::Investigation {
            return claim;
        }

        claim = wizard
            .attach_invoice(claim, self.vendor, self.items)
            .expect("test invoice must be valid");
        claim = wizard
            .compute_settlement(claim)
            .expect("settlement must compute");
        if self.stage == ClaimStage::Settlement {
            return claim;
        }

        wizard
            .authorize(claim, Confirmations::both())
            .expect("authorization must succeed")
    }
}
