//! Repair invoice line items
//!
//! A line item is one billed charge on the repair invoice. The
//! `covered` flag is assigned by the policy-matching collaborator when
//! the invoice is analyzed and is not edited afterwards; `flag` carries
//! an anomaly note where the analysis found the charge suspicious.

use serde::{Deserialize, Serialize};

use core_kernel::{Currency, LineItemId, Money};

use crate::error::ClaimError;

/// A single billed charge on a repair/service invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unique identifier
    pub id: LineItemId,
    /// Description of the charge
    pub description: String,
    /// Billed amount
    pub billed_amount: Money,
    /// Whether the charge falls under the policy's coverage
    pub covered: bool,
    /// Anomaly note, if the analysis flagged this charge
    pub flag: Option<String>,
}

impl LineItem {
    /// Creates an uncovered, unflagged line item
    pub fn new(description: impl Into<String>, billed_amount: Money) -> Self {
        Self {
            id: LineItemId::new_v7(),
            description: description.into(),
            billed_amount,
            covered: false,
            flag: None,
        }
    }

    /// Marks the item as covered by the policy
    pub fn covered(mut self) -> Self {
        self.covered = true;
        self
    }

    /// Attaches an anomaly note
    pub fn flagged(mut self, note: impl Into<String>) -> Self {
        self.flag = Some(note.into());
        self
    }

    /// Validates this item in isolation
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.description.trim().is_empty() {
            return Err(ClaimError::invalid_input(
                "description",
                "line item description must not be empty",
            ));
        }
        if self.billed_amount.is_negative() {
            return Err(ClaimError::invalid_input(
                "billed_amount",
                format!(
                    "billed amount for '{}' must be non-negative, got {}",
                    self.description, self.billed_amount
                ),
            ));
        }
        Ok(())
    }
}

/// Validates a line-item set and returns its single currency
///
/// # Errors
///
/// Returns `ClaimError::InvalidInput` naming `line_items` when the set
/// is empty, `currency` when items mix currencies, or the per-item
/// field when an item is malformed.
pub fn validate_line_items(items: &[LineItem]) -> Result<Currency, ClaimError> {
    let first = items.first().ok_or_else(|| {
        ClaimError::invalid_input("line_items", "invoice must contain at least one line item")
    })?;

    let currency = first.billed_amount.currency();
    for item in items {
        item.validate()?;
        if item.billed_amount.currency() != currency {
            return Err(ClaimError::invalid_input(
                "currency",
                format!(
                    "line item '{}' is denominated in {}, expected {}",
                    item.description,
                    item.billed_amount.currency(),
                    currency
                ),
            ));
        }
    }
    Ok(currency)
}
