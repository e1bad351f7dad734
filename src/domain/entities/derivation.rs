//! Derivation outcome entity
//!
//! Every decision the deriver takes about a source image, or about one
//! (source, target width) pair, ends up as exactly one [`DerivationOutcome`].

use std::fmt;
use std::path::{Path, PathBuf};

/// Why a source or a single target width was not derived.
///
/// The set is closed; the first two are produced while walking the tree and
/// never reach a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file sits under an excluded directory
    DirectoryExcluded,
    /// The file name already carries a derivative-width suffix
    PreSizedDerivative,
    /// The width could not be read from the file header.
    /// `None` means the header parsed but carried no usable width.
    WidthUnreadable { error: Option<String> },
    /// The source is narrower than the profile's minimum source width
    BelowMinimumWidth { width: u32, minimum: u32 },
    /// The source is narrower than the target width
    WouldUpscale,
    /// The derivative file is already on disk
    OutputAlreadyExists,
}

impl SkipReason {
    /// Stable kebab-case code
    pub fn code(&self) -> &'static str {
        match self {
            Self::DirectoryExcluded => "directory-excluded",
            Self::PreSizedDerivative => "pre-sized-derivative",
            Self::WidthUnreadable { .. } => "width-unreadable",
            Self::BelowMinimumWidth { .. } => "below-minimum-width",
            Self::WouldUpscale => "would-upscale",
            Self::OutputAlreadyExists => "output-already-exists",
        }
    }

    /// Free-text wording used by the flat report
    pub fn describe(&self) -> String {
        match self {
            Self::DirectoryExcluded => "directory excluded".to_string(),
            Self::PreSizedDerivative => "pre-sized derivative".to_string(),
            Self::WidthUnreadable { error: Some(e) } => format!("unreadable ({e})"),
            Self::WidthUnreadable { error: None } => "missing width metadata".to_string(),
            Self::BelowMinimumWidth { width, minimum } => {
                format!("source width {width} below {minimum}")
            }
            Self::WouldUpscale => "source smaller than target (no upscale)".to_string(),
            Self::OutputAlreadyExists => "already exists".to_string(),
        }
    }
}

/// Detailed-report wording (`no_upscale`, `source_width_800_below_1280`, ...)
impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DirectoryExcluded => f.write_str("directory_excluded"),
            Self::PreSizedDerivative => f.write_str("pre_sized_derivative"),
            Self::WidthUnreadable { error: Some(e) } => write!(f, "metadata_read_failed: {e}"),
            Self::WidthUnreadable { error: None } => f.write_str("metadata_missing_width"),
            Self::BelowMinimumWidth { width, minimum } => {
                write!(f, "source_width_{width}_below_{minimum}")
            }
            Self::WouldUpscale => f.write_str("no_upscale"),
            Self::OutputAlreadyExists => f.write_str("already_exists"),
        }
    }
}

/// Result of one derivation decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DerivationOutcome {
    /// A new derivative was written
    Generated {
        source: PathBuf,
        target: u32,
        output: PathBuf,
    },
    /// Nothing was written; `target` is `None` when the whole source was skipped
    Skipped {
        source: PathBuf,
        target: Option<u32>,
        reason: SkipReason,
    },
    /// The encoder failed for this pair
    Failed {
        source: PathBuf,
        target: u32,
        message: String,
    },
}

impl DerivationOutcome {
    pub fn source(&self) -> &Path {
        match self {
            Self::Generated { source, .. }
            | Self::Skipped { source, .. }
            | Self::Failed { source, .. } => source,
        }
    }

    pub fn target(&self) -> Option<u32> {
        match self {
            Self::Generated { target, .. } | Self::Failed { target, .. } => Some(*target),
            Self::Skipped { target, .. } => *target,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated { .. })
    }

    /// Returns the skip reason, if this is a skip
    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Skipped { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
