//! Infrastructure layer
//!
//! Concrete implementations of the domain repositories, and the
//! filesystem walks that feed the use cases.

pub mod codec;
pub mod walker;
