//! Domain events for the claim aggregate
//!
//! Events record every significant lifecycle change on the claim and
//! form its audit trail. They are appended by the aggregate itself;
//! consumers read them, they never rewrite them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Money, SettlementId};

use crate::claim::ClaimStage;

/// Domain events emitted by the Claim aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClaimEvent {
    /// Claim opened from a validated intake
    ClaimOpened {
        claim_id: ClaimId,
        timestamp: DateTime<Utc>,
    },

    /// Stage advanced one step forward
    StageAdvanced {
        from: ClaimStage,
        to: ClaimStage,
        timestamp: DateTime<Utc>,
    },

    /// Triage assessment attached
    TriageRecorded {
        fraud_score: u8,
        recommended_adjuster: String,
        timestamp: DateTime<Utc>,
    },

    /// Invoice line items attached (replacing any prior set)
    InvoiceAttached {
        item_count: usize,
        timestamp: DateTime<Utc>,
    },

    /// Investigation report filed
    InvestigationRecorded { timestamp: DateTime<Utc> },

    /// Settlement computed and attached
    SettlementComputed {
        settlement_id: SettlementId,
        insurer_pays: Money,
        timestamp: DateTime<Utc>,
    },

    /// Claim authorized and closed
    ClaimAuthorized { timestamp: DateTime<Utc> },
}

impl ClaimEvent {
    /// Returns the event timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            ClaimEvent::ClaimOpened { timestamp, .. }
            | ClaimEvent::StageAdvanced { timestamp, .. }
            | ClaimEvent::TriageRecorded { timestamp, .. }
            | ClaimEvent::InvoiceAttached { timestamp, .. }
            | ClaimEvent::InvestigationRecorded { timestamp }
            | ClaimEvent::SettlementComputed { timestamp, .. }
            | ClaimEvent::ClaimAuthorized { timestamp } => *timestamp,
        }
    }
}
