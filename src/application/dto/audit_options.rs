//! Link audit options DTO

use crate::domain::services::link_rules::DEFAULT_SITE_PREFIX;
use std::path::PathBuf;

/// Root-relative directories the auditor never descends into
pub const DEFAULT_SKIP_DIRS: [&str; 3] = ["node_modules", ".git", "assets/img/_stage1_backup"];

/// Options for a link audit
#[derive(Debug, Clone)]
pub struct AuditOptions {
    /// Project root; absolute links resolve against it
    pub root: PathBuf,
    /// Root-relative directories to skip, matched exactly or as a prefix
    pub skip_dirs: Vec<String>,
    /// Prefix the site was served under, mapped onto the root
    pub site_prefix: Option<String>,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|d| d.to_string()).collect(),
            site_prefix: Some(DEFAULT_SITE_PREFIX.to_string()),
        }
    }
}

impl AuditOptions {
    /// Creates options for the given root with the default skip list
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    /// Replaces the skip list
    pub fn with_skip_dirs(mut self, dirs: Vec<String>) -> Self {
        self.skip_dirs = dirs
            .into_iter()
            .map(|d| d.trim_matches('/').to_string())
            .filter(|d| !d.is_empty())
            .collect();
        self
    }

    /// Sets or clears the site prefix
    pub fn with_site_prefix(mut self, prefix: Option<String>) -> Self {
        self.site_prefix = prefix.filter(|p| !p.trim_matches('/').is_empty());
        self
    }
}
