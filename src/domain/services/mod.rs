//! Domain services
//!
//! Pure rules: which files are sources, what to do with each target width,
//! and how a link in a page maps onto the filesystem.

pub mod link_rules;
pub mod planner;
pub mod selection;

pub use link_rules::{LinkExtractor, candidate_paths, is_external_or_ignored, normalize_target, resolve_target};
pub use planner::{
    SourceDecision, TargetDecision, TargetSkip, attainable_targets, classify_source,
    classify_target, derivative_path,
};
pub use selection::{PRESIZED_WIDTHS, PathDecision, SelectionRules};
