pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interaction;
pub mod presentation;
pub mod telemetry;
pub mod utils;

pub use application::dto::{AuditReport, DerivationProfile, FailurePolicy, RunReport};
pub use domain::entities::{DerivationOutcome, LinkFinding, SkipReason};
pub use domain::repositories::{CodecError, ImageCodec};
