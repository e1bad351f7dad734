//! Derivation report DTO
//!
//! Accumulates outcomes over a run and serializes once at the end.

use super::derivation_profile::{DerivationProfile, ReportStyle};
use crate::domain::entities::{DerivationOutcome, SkipReason};
use crate::utils::{relative_display, to_posix};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Configuration echoed into the detailed report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportConfig {
    pub source_dir: String,
    pub targets: Vec<u32>,
    pub quality: u8,
    pub min_source_width: Option<u32>,
}

/// A skipped or failed entry of the detailed report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeEntry {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    pub reason: String,
}

/// Config echo, counts, and the three outcome lists
#[derive(Debug, Clone, Serialize)]
pub struct DetailedReport {
    #[serde(skip)]
    root: PathBuf,
    pub config: ReportConfig,
    pub source_count: usize,
    pub generated_count: usize,
    pub skipped_count: usize,
    pub failed_count: usize,
    pub generated: Vec<String>,
    pub skipped: Vec<OutcomeEntry>,
    pub failed: Vec<OutcomeEntry>,
}

impl DetailedReport {
    fn record(&mut self, outcome: &DerivationOutcome) {
        let source = relative_display(&self.root, outcome.source());
        match outcome {
            DerivationOutcome::Generated { output, .. } => {
                self.generated.push(relative_display(&self.root, output));
                self.generated_count += 1;
            }
            // An unreadable width is a failure of the source, not a choice
            DerivationOutcome::Skipped {
                target,
                reason: reason @ SkipReason::WidthUnreadable { .. },
                ..
            } => {
                self.failed.push(OutcomeEntry {
                    source,
                    target: *target,
                    reason: reason.to_string(),
                });
                self.failed_count += 1;
            }
            DerivationOutcome::Skipped { target, reason, .. } => {
                self.skipped.push(OutcomeEntry {
                    source,
                    target: *target,
                    reason: reason.to_string(),
                });
                self.skipped_count += 1;
            }
            DerivationOutcome::Failed {
                target, message, ..
            } => {
                self.failed.push(OutcomeEntry {
                    source,
                    target: Some(*target),
                    reason: format!("encode_failed: {message}"),
                });
                self.failed_count += 1;
            }
        }
    }
}

/// A skip entry of the flat report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlatSkip {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<u32>,
    pub reason: String,
}

/// Generated paths plus free-text skips
#[derive(Debug, Clone, Serialize)]
pub struct FlatReport {
    #[serde(skip)]
    root: PathBuf,
    #[serde(skip)]
    failures: usize,
    pub source_count: usize,
    pub generated_count: usize,
    pub generated: Vec<String>,
    pub skipped: Vec<FlatSkip>,
}

impl FlatReport {
    fn record(&mut self, outcome: &DerivationOutcome) {
        let src = relative_display(&self.root, outcome.source());
        match outcome {
            DerivationOutcome::Generated { output, .. } => {
                self.generated.push(relative_display(&self.root, output));
                self.generated_count += 1;
            }
            DerivationOutcome::Skipped { target, reason, .. } => {
                if matches!(reason, SkipReason::WidthUnreadable { .. }) {
                    self.failures += 1;
                }
                self.skipped.push(FlatSkip {
                    src,
                    target: *target,
                    reason: reason.describe(),
                });
            }
            DerivationOutcome::Failed {
                target, message, ..
            } => {
                self.failures += 1;
                self.skipped.push(FlatSkip {
                    src,
                    target: Some(*target),
                    reason: format!("encode failed ({message})"),
                });
            }
        }
    }
}

/// The report of one derivation run, in the profile's style
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RunReport {
    Detailed(DetailedReport),
    Flat(FlatReport),
}

impl RunReport {
    /// Creates an empty report for `source_count` sources
    pub fn new(profile: &DerivationProfile, root: &Path, source_count: usize) -> Self {
        match profile.report_style {
            ReportStyle::Detailed => Self::Detailed(DetailedReport {
                root: root.to_path_buf(),
                config: ReportConfig {
                    source_dir: to_posix(&profile.source_dir),
                    targets: profile.targets.clone(),
                    quality: profile.quality,
                    min_source_width: profile.min_source_width,
                },
                source_count,
                generated_count: 0,
                skipped_count: 0,
                failed_count: 0,
                generated: Vec::new(),
                skipped: Vec::new(),
                failed: Vec::new(),
            }),
            ReportStyle::Flat => Self::Flat(FlatReport {
                root: root.to_path_buf(),
                failures: 0,
                source_count,
                generated_count: 0,
                generated: Vec::new(),
                skipped: Vec::new(),
            }),
        }
    }

    /// Adds one outcome
    pub fn record(&mut self, outcome: &DerivationOutcome) {
        match self {
            Self::Detailed(r) => r.record(outcome),
            Self::Flat(r) => r.record(outcome),
        }
    }

    pub fn source_count(&self) -> usize {
        match self {
            Self::Detailed(r) => r.source_count,
            Self::Flat(r) => r.source_count,
        }
    }

    pub fn generated(&self) -> &[String] {
        match self {
            Self::Detailed(r) => &r.generated,
            Self::Flat(r) => &r.generated,
        }
    }

    pub fn generated_count(&self) -> usize {
        self.generated().len()
    }

    pub fn skipped_count(&self) -> usize {
        match self {
            Self::Detailed(r) => r.skipped_count,
            Self::Flat(r) => r.skipped.len(),
        }
    }

    /// Failures, counting unreadable sources in both styles
    pub fn failed_count(&self) -> usize {
        match self {
            Self::Detailed(r) => r.failed_count,
            Self::Flat(r) => r.failures,
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
