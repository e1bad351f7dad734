//! Derivation profile DTO
//!
//! One configurable pipeline covers both deriver variants; a profile
//! carries everything that differs between them.

use crate::domain::services::SelectionRules;
use std::path::PathBuf;
use std::process::ExitCode;

const BULK_SOURCE_DIR: &str = "assets/img";
const BULK_TARGETS: [u32; 4] = [960, 1280, 1920, 2560];
const BULK_QUALITY: u8 = 67;
const BULK_MIN_SOURCE_WIDTH: u32 = 1280;

const GAPYEAR_SOURCE_DIR: &str = "assets/img/travel/gapyear";
const GAPYEAR_TARGETS: [u32; 3] = [1280, 1920, 2560];
const GAPYEAR_QUALITY: u8 = 65;

/// Shape of the JSON report printed at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportStyle {
    /// Config echo, counts, generated/skipped/failed lists
    #[default]
    Detailed,
    /// Generated paths and free-text skips only
    Flat,
}

/// How failed outcomes affect the exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Failures only show up in the report
    #[default]
    BestEffort,
    /// Any failure makes the run exit non-zero
    FailOnError,
}

impl FailurePolicy {
    /// Returns true if a run with `failed` failures should exit non-zero
    pub fn should_fail(self, failed: usize) -> bool {
        match self {
            Self::BestEffort => false,
            Self::FailOnError => failed > 0,
        }
    }

    /// Exit status for a run with `failed` failures
    pub fn exit_code(self, failed: usize) -> ExitCode {
        if self.should_fail(failed) {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}

/// Configuration of one derivation pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationProfile {
    /// Profile name, for logs
    pub name: String,
    /// Source directory, relative to the project root
    pub source_dir: PathBuf,
    /// Whether subdirectories are walked
    pub recursive: bool,
    /// Which files count as sources
    pub rules: SelectionRules,
    /// Target widths, ascending and unique
    pub targets: Vec<u32>,
    /// Encoder quality, 1-100
    pub quality: u8,
    /// Sources narrower than this are skipped whole
    pub min_source_width: Option<u32>,
    pub report_style: ReportStyle,
    pub failure_policy: FailurePolicy,
    /// Worker threads; 1 runs sequentially
    pub jobs: usize,
}

impl DerivationProfile {
    /// Every photo under `assets/img`
    pub fn bulk() -> Self {
        Self {
            name: "bulk".to_string(),
            source_dir: PathBuf::from(BULK_SOURCE_DIR),
            recursive: true,
            rules: SelectionRules::photos(),
            targets: BULK_TARGETS.to_vec(),
            quality: BULK_QUALITY,
            min_source_width: Some(BULK_MIN_SOURCE_WIDTH),
            report_style: ReportStyle::Detailed,
            failure_policy: FailurePolicy::BestEffort,
            jobs: 1,
        }
    }

    /// JPEGs directly inside the gap-year gallery
    pub fn gapyear() -> Self {
        Self {
            name: "gapyear".to_string(),
            source_dir: PathBuf::from(GAPYEAR_SOURCE_DIR),
            recursive: false,
            rules: SelectionRules::jpeg_only(),
            targets: GAPYEAR_TARGETS.to_vec(),
            quality: GAPYEAR_QUALITY,
            min_source_width: None,
            report_style: ReportStyle::Flat,
            failure_policy: FailurePolicy::BestEffort,
            jobs: 1,
        }
    }

    /// Looks up a built-in profile
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bulk" | "all" => Some(Self::bulk()),
            "gapyear" | "scoped" => Some(Self::gapyear()),
            _ => None,
        }
    }

    /// Replaces the target widths; they are sorted and deduplicated
    pub fn with_targets(mut self, mut targets: Vec<u32>) -> Self {
        targets.retain(|t| *t > 0);
        targets.sort_unstable();
        targets.dedup();
        self.targets = targets;
        self
    }

    /// Sets the encoder quality, clamped to 1-100
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }

    pub fn with_min_source_width(mut self, width: Option<u32>) -> Self {
        self.min_source_width = width;
        self
    }

    pub fn with_source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = dir.into();
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Sets the worker count; zero is treated as one
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }
}
