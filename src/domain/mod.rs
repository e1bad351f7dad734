//! Domain layer - Core business logic
//!
//! Entities, the image codec contract, and the pure classification rules
//! for both the link auditor and the image deriver. Nothing in here touches
//! the filesystem except through the [`repositories::ImageCodec`] trait.

pub mod entities;
pub mod repositories;
pub mod services;
