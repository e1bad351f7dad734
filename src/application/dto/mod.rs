//! Data Transfer Objects

mod audit_options;
mod audit_report;
mod derivation_profile;
mod derivation_report;

pub use audit_options::{AuditOptions, DEFAULT_SKIP_DIRS};
pub use audit_report::{AuditReport, BrokenLink};
pub use derivation_profile::{DerivationProfile, FailurePolicy, ReportStyle};
pub use derivation_report::{DetailedReport, FlatReport, FlatSkip, OutcomeEntry, ReportConfig, RunReport};
