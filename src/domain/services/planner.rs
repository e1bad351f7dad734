//! Derivation planner
//!
//! Pure decisions about a source and its target widths. The deriver feeds
//! in what it learned from the codec and the filesystem; nothing here does
//! I/O.

use crate::domain::entities::SkipReason;
use std::path::{Path, PathBuf};

/// Extension of every derivative
pub const DERIVATIVE_EXTENSION: &str = "avif";

/// What to do with a source once its width probe has returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDecision {
    /// Go on to the target widths
    Derive { width: u32 },
    /// Drop the whole source
    Skip(SkipReason),
}

/// What to do with one target width of an accepted source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDecision {
    Derive,
    Skip(TargetSkip),
}

/// Per-target skip reasons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSkip {
    WouldUpscale,
    OutputAlreadyExists,
}

impl From<TargetSkip> for SkipReason {
    fn from(skip: TargetSkip) -> Self {
        match skip {
            TargetSkip::WouldUpscale => SkipReason::WouldUpscale,
            TargetSkip::OutputAlreadyExists => SkipReason::OutputAlreadyExists,
        }
    }
}

/// Classifies a source from its width probe.
///
/// `probe` is `Err(message)` when the header could not be read and
/// `Ok(None)` when it carried no width. A width of zero counts as missing.
pub fn classify_source(probe: Result<Option<u32>, String>, minimum: Option<u32>) -> SourceDecision {
    let width = match probe {
        Err(error) => {
            return SourceDecision::Skip(SkipReason::WidthUnreadable { error: Some(error) });
        }
        Ok(None) | Ok(Some(0)) => {
            return SourceDecision::Skip(SkipReason::WidthUnreadable { error: None });
        }
        Ok(Some(width)) => width,
    };

    match minimum {
        Some(minimum) if width < minimum => {
            SourceDecision::Skip(SkipReason::BelowMinimumWidth { width, minimum })
        }
        _ => SourceDecision::Derive { width },
    }
}

/// Classifies one target width. Upscaling is checked before existence.
pub fn classify_target(source_width: u32, target: u32, output_exists: bool) -> TargetDecision {
    if source_width < target {
        TargetDecision::Skip(TargetSkip::WouldUpscale)
    } else if output_exists {
        TargetDecision::Skip(TargetSkip::OutputAlreadyExists)
    } else {
        TargetDecision::Derive
    }
}

/// Targets that may be attempted for a source of `source_width`
pub fn attainable_targets(source_width: u32, targets: &[u32]) -> impl Iterator<Item = u32> + '_ {
    targets.iter().copied().filter(move |t| *t <= source_width)
}

/// `<dir>/<stem>-<target>.avif` next to the source
pub fn derivative_path(source: &Path, target: u32) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    source.with_file_name(format!("{stem}-{target}.{DERIVATIVE_EXTENSION}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_width_is_missing() {
        assert_eq!(
            classify_source(Ok(Some(0)), None),
            SourceDecision::Skip(SkipReason::WidthUnreadable { error: None })
        );
    }

    #[test]
    fn minimum_is_inclusive() {
        assert_eq!(
            classify_source(Ok(Some(1280)), Some(1280)),
            SourceDecision::Derive { width: 1280 }
        );
    }

    #[test]
    fn upscale_wins_over_existing_output() {
        assert_eq!(
            classify_target(900, 960, true),
            TargetDecision::Skip(TargetSkip::WouldUpscale)
        );
    }

    #[test]
    fn derivative_sits_next_to_source() {
        let p = derivative_path(Path::new("assets/img/travel/photo.jpg"), 960);
        assert_eq!(p, PathBuf::from("assets/img/travel/photo-960.avif"));
    }
}
