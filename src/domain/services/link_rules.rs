//! Link rules
//!
//! Extraction, filtering, and resolution of local references found in HTML
//! text. Extraction is a pattern scan rather than a parse, so malformed
//! markup may yield odd values; those simply fail to resolve.

use crate::utils::normalize_lexically;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Attribute pattern for double-quoted `href`/`src` values
pub const ATTRIBUTE_PATTERN: &str = r#"\b(?:href|src)="([^"]+)""#;

/// Site-root prefix the pages were historically served under
pub const DEFAULT_SITE_PREFIX: &str = "/ItalianExperience";

/// Prefixes that never point into the local tree
const IGNORED_PREFIXES: [&str; 7] = [
    "http://", "https://", "mailto:", "tel:", "#", "data:", "//",
];

/// Pulls `href`/`src` values out of HTML text
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(ATTRIBUTE_PATTERN)?,
        })
    }

    /// Returns every attribute value in document order, trimmed
    pub fn extract<'h>(&self, html: &'h str) -> impl Iterator<Item = &'h str> {
        self.pattern
            .captures_iter(html)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str().trim())
    }
}

/// Returns true for empty values, fragment-only references, and external
/// or non-filesystem schemes
pub fn is_external_or_ignored(link: &str) -> bool {
    link.is_empty() || IGNORED_PREFIXES.iter().any(|p| link.starts_with(p))
}

/// Strips fragment and query, then maps the site-root prefix onto `/`.
///
/// Returns `None` when nothing is left to resolve.
pub fn normalize_target(link: &str, site_prefix: Option<&str>) -> Option<String> {
    let without_fragment = link.split('#').next().unwrap_or_default();
    let clean = without_fragment.split('?').next().unwrap_or_default();
    if clean.is_empty() {
        return None;
    }

    if let Some(prefix) = site_prefix.map(|p| p.trim_end_matches('/')).filter(|p| !p.is_empty()) {
        if clean == prefix {
            return Some("/".to_string());
        }
        if let Some(rest) = clean.strip_prefix(prefix) {
            if rest.starts_with('/') {
                return Some(rest.to_string());
            }
        }
    }

    Some(clean.to_string())
}

/// Resolves a normalized link: absolute links against `root`, relative
/// links against the directory of `referrer`
pub fn resolve_target(root: &Path, referrer: &Path, link: &str) -> PathBuf {
    let joined = match link.strip_prefix('/') {
        Some(rest) => root.join(rest),
        None => referrer.parent().unwrap_or(root).join(link),
    };
    normalize_lexically(&joined)
}

/// The three filesystem forms that satisfy a link: the path itself,
/// `<path>.html`, and `<path>/index.html`
pub fn candidate_paths(target: &Path) -> [PathBuf; 3] {
    let mut with_html = target.as_os_str().to_owned();
    with_html.push(".html");
    [
        target.to_path_buf(),
        PathBuf::from(with_html),
        target.join("index.html"),
    ]
}
