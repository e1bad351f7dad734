//! Audit links use case
//!
//! Scans HTML files for local `href`/`src` references and checks that each
//! one resolves to something on disk.

use crate::application::dto::{AuditOptions, AuditReport};
use crate::domain::entities::LinkFinding;
use crate::domain::services::{
    LinkExtractor, candidate_paths, is_external_or_ignored, normalize_target, resolve_target,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Audit links use case
pub struct AuditLinksUseCase {
    options: AuditOptions,
    extractor: LinkExtractor,
}

impl AuditLinksUseCase {
    /// Creates a new audit links use case
    pub fn new(options: AuditOptions) -> Result<Self> {
        let extractor = LinkExtractor::new().context("invalid link attribute pattern")?;
        Ok(Self { options, extractor })
    }

    pub fn options(&self) -> &AuditOptions {
        &self.options
    }

    /// Checks every local reference in one HTML document
    pub fn scan_html(&self, file: &Path, html: &str) -> Vec<LinkFinding> {
        let site_prefix = self.options.site_prefix.as_deref();

        self.extractor
            .extract(html)
            .filter(|link| !is_external_or_ignored(link))
            .filter_map(|link| {
                let normalized = normalize_target(link, site_prefix)?;
                let resolved = resolve_target(&self.options.root, file, &normalized);
                let exists = candidate_paths(&resolved).iter().any(|p| p.exists());
                Some(LinkFinding::new(
                    file.to_path_buf(),
                    link.to_string(),
                    resolved,
                    exists,
                ))
            })
            .collect()
    }

    /// Audits the given HTML files.
    ///
    /// Files are scanned in parallel; findings keep the order of `files`.
    pub fn execute(&self, files: &[PathBuf]) -> Result<AuditReport> {
        let start = Instant::now();
        info!(files = files.len(), root = %self.options.root.display(), "starting link audit");

        let per_file = files
            .par_iter()
            .map(|file| {
                let bytes =
                    fs::read(file).with_context(|| format!("failed to read {}", file.display()))?;
                let html = String::from_utf8_lossy(&bytes);
                let findings = self.scan_html(file, &html);
                debug!(file = %file.display(), links = findings.len(), "scanned");
                Ok(findings)
            })
            .collect::<Result<Vec<_>>>()?;

        let findings: Vec<LinkFinding> = per_file.into_iter().flatten().collect();
        let report = AuditReport::from_findings(&self.options.root, files.len(), &findings);

        info!(
            links = report.links_checked,
            broken = report.problems.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "link audit complete"
        );

        Ok(report)
    }
}
