//! Application layer
//!
//! Use cases that run the domain rules over a list of files and collect
//! the results into a single report.

pub mod dto;
mod audit_links;
mod derive_images;

pub use audit_links::AuditLinksUseCase;
pub use derive_images::{DerivationProgressCallback, DeriveImagesUseCase};
