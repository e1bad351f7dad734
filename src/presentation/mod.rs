//! Presentation layer
//!
//! Command-line surface of the binary.

pub mod cli;
