//! Domain entities
//!
//! Transient values produced during a single run of the link auditor or
//! the image deriver.

mod derivation;
mod link_finding;

pub use derivation::{DerivationOutcome, SkipReason};
pub use link_finding::LinkFinding;
