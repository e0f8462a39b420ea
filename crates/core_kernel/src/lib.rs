//! Core Kernel - Foundational types for the claims-processing core
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for domain entities
//! - The core error type

pub mod error;
pub mod identifiers;
pub mod money;

pub use error::CoreError;
pub use identifiers::{ClaimId, EvidenceId, LineItemId, PolicyId, SettlementId};
pub use money::{Currency, Money, MoneyError};
