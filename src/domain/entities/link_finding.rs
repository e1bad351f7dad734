//! Link finding entity
//!
//! One local reference found in an HTML file, with the filesystem path it
//! resolved to.

use std::path::{Path, PathBuf};

/// A single `href`/`src` value checked against the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFinding {
    /// HTML file the link was found in
    file: PathBuf,
    /// Link text exactly as written (trimmed)
    link: String,
    /// Filesystem path the link resolved to
    resolved: PathBuf,
    /// Whether any accepted form of the target exists
    exists: bool,
}

impl LinkFinding {
    /// Creates a new finding
    pub fn new(file: PathBuf, link: String, resolved: PathBuf, exists: bool) -> Self {
        Self {
            file,
            link,
            resolved,
            exists,
        }
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn resolved(&self) -> &Path {
        &self.resolved
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Returns true when no accepted form of the target exists
    pub fn is_broken(&self) -> bool {
        !self.exists
    }
}
