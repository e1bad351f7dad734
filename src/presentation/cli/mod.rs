//! CLI module

mod commands;
mod progress;

pub use commands::{Cli, Commands, ProfileName, build_audit_options, build_profile};
pub use progress::ProgressReporter;
