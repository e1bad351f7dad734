//! Source selection rules
//!
//! Decides, from names alone, which files under an image tree are sources
//! for derivation.

use crate::domain::entities::SkipReason;

/// Widths that mark a file as an already generated derivative
pub const PRESIZED_WIDTHS: [u32; 5] = [960, 1280, 1600, 1920, 2560];

/// What to do with a path found while walking the image tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathDecision {
    /// A source image to derive from
    Source,
    /// Not a raster we handle
    Ignored,
    /// Deliberately left out
    Excluded(SkipReason),
}

/// Name-based rules for picking source images out of a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRules {
    /// Accepted extensions, lower case, without the dot
    pub extensions: Vec<String>,
    /// Directory names that are never entered
    pub excluded_dir_names: Vec<String>,
    /// Root-relative markers such as `/assets/img/_stage1_backup/`; a
    /// directory whose `/<relative path>/` contains one is never entered
    pub skip_markers: Vec<String>,
    /// Stem suffixes (`-<width>`) identifying pre-sized derivatives
    pub presized_widths: Vec<u32>,
}

impl SelectionRules {
    /// JPEG and PNG photos anywhere in the tree
    pub fn photos() -> Self {
        Self {
            extensions: vec!["jpg".into(), "jpeg".into(), "png".into()],
            excluded_dir_names: vec!["node_modules".into(), ".git".into()],
            skip_markers: vec!["/assets/img/_stage1_backup/".into()],
            presized_widths: PRESIZED_WIDTHS.to_vec(),
        }
    }

    /// JPEG only, no directory exclusions
    pub fn jpeg_only() -> Self {
        Self {
            extensions: vec!["jpg".into(), "jpeg".into()],
            excluded_dir_names: Vec::new(),
            skip_markers: Vec::new(),
            presized_widths: PRESIZED_WIDTHS.to_vec(),
        }
    }

    /// Decides whether a directory may be entered.
    ///
    /// `relative` is the directory path relative to the project root, with
    /// `/` separators.
    pub fn classify_dir(&self, name: &str, relative: &str) -> PathDecision {
        if self.excluded_dir_names.iter().any(|d| d == name) {
            return PathDecision::Excluded(SkipReason::DirectoryExcluded);
        }

        let wrapped = format!("/{}/", relative.trim_matches('/'));
        if self.skip_markers.iter().any(|m| wrapped.contains(m.as_str())) {
            return PathDecision::Excluded(SkipReason::DirectoryExcluded);
        }

        PathDecision::Source
    }

    /// Decides whether a file name is a derivation source
    pub fn classify_file(&self, file_name: &str) -> PathDecision {
        let Some((stem, ext)) = file_name.rsplit_once('.') else {
            return PathDecision::Ignored;
        };
        if stem.is_empty() {
            return PathDecision::Ignored;
        }

        let ext = ext.to_ascii_lowercase();
        if !self.extensions.iter().any(|e| *e == ext) {
            return PathDecision::Ignored;
        }

        if self.is_presized_stem(stem) {
            return PathDecision::Excluded(SkipReason::PreSizedDerivative);
        }

        PathDecision::Source
    }

    /// Returns true if `stem` ends in `-<width>` for a known derivative width
    pub fn is_presized_stem(&self, stem: &str) -> bool {
        stem.rsplit_once('-')
            .and_then(|(_, suffix)| suffix.parse::<u32>().ok().map(|w| (suffix, w)))
            .is_some_and(|(suffix, w)| {
                !suffix.starts_with('+') && !suffix.starts_with('0') && self.presized_widths.contains(&w)
            })
    }
}
