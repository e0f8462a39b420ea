//! Policy Terms Domain
//!
//! This crate defines policy terms the way the claims lifecycle consumes
//! them: a coverage type, a deductible, and a coverage cap, validated as
//! a unit. Policy administration (quoting, endorsements, renewals) is
//! out of scope here; a claim only needs the terms in force at loss date.

pub mod error;
pub mod terms;

pub use error::PolicyError;
pub use terms::{CoverageType, PolicyTerms};
