//! CLI commands using clap

use crate::application::dto::{AuditOptions, DerivationProfile, FailurePolicy};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Site assets - build-time tooling for the static site
///
/// Checks local links in the generated HTML and derives AVIF images at
/// fixed widths from the photo sources.
#[derive(Parser)]
#[command(name = "site-assets")]
#[command(version)]
#[command(about = "Check site links and derive responsive AVIF images", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Project root
    #[arg(long, global = true, env = "SITE_ASSETS_ROOT", default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Built-in derivation profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileName {
    /// Every photo under assets/img
    Bulk,
    /// JPEGs in assets/img/travel/gapyear
    Gapyear,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report local href/src references that do not resolve
    CheckLinks {
        /// Prefix the site is served under; mapped onto the root
        #[arg(long, env = "SITE_ASSETS_SITE_PREFIX", default_value = "/ItalianExperience")]
        site_prefix: String,

        /// Root-relative directories to skip (replaces the defaults)
        #[arg(long = "skip-dir", value_delimiter = ',')]
        skip_dirs: Option<Vec<String>>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate AVIF derivatives at fixed widths
    DeriveImages {
        /// Profile to run
        #[arg(short, long, value_enum, env = "SITE_ASSETS_PROFILE", default_value_t = ProfileName::Bulk)]
        profile: ProfileName,

        /// Source directory relative to the root (overrides the profile)
        #[arg(long)]
        source_dir: Option<PathBuf>,

        /// Target widths (overrides the profile)
        #[arg(short, long, value_delimiter = ',')]
        targets: Option<Vec<u32>>,

        /// Encoder quality 1-100 (overrides the profile)
        #[arg(short, long)]
        quality: Option<u8>,

        /// Minimum source width (overrides the profile)
        #[arg(long, conflicts_with = "no_min_width")]
        min_width: Option<u32>,

        /// Consider every readable source regardless of width
        #[arg(long)]
        no_min_width: bool,

        /// Worker threads
        #[arg(short, long, env = "SITE_ASSETS_JOBS", default_value = "1")]
        jobs: usize,

        /// AVIF encoder speed 1-10
        #[arg(long, default_value = "6")]
        speed: u8,

        /// Exit non-zero if any derivative failed
        #[arg(long)]
        fail_on_error: bool,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

/// Builds audit options from the `check-links` arguments
pub fn build_audit_options(
    root: &Path,
    site_prefix: &str,
    skip_dirs: Option<Vec<String>>,
) -> AuditOptions {
    let options = AuditOptions::new(root).with_site_prefix(Some(site_prefix.to_string()));
    match skip_dirs {
        Some(dirs) => options.with_skip_dirs(dirs),
        None => options,
    }
}

/// Builds a profile from the `derive-images` arguments
#[allow(clippy::too_many_arguments)]
pub fn build_profile(
    profile: ProfileName,
    source_dir: Option<PathBuf>,
    targets: Option<Vec<u32>>,
    quality: Option<u8>,
    min_width: Option<u32>,
    no_min_width: bool,
    jobs: usize,
    fail_on_error: bool,
) -> DerivationProfile {
    let mut built = match profile {
        ProfileName::Bulk => DerivationProfile::bulk(),
        ProfileName::Gapyear => DerivationProfile::gapyear(),
    };

    if let Some(dir) = source_dir {
        built = built.with_source_dir(dir);
    }
    if let Some(targets) = targets {
        built = built.with_targets(targets);
    }
    if let Some(quality) = quality {
        built = built.with_quality(quality);
    }
    if no_min_width {
        built = built.with_min_source_width(None);
    } else if min_width.is_some() {
        built = built.with_min_source_width(min_width);
    }
    if fail_on_error {
        built = built.with_failure_policy(FailurePolicy::FailOnError);
    }

    built.with_jobs(jobs)
}
