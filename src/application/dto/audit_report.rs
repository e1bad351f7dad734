//! Link audit report DTO

use crate::domain::entities::LinkFinding;
use crate::utils::relative_display;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

/// A reference that did not resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokenLink {
    /// Root-relative HTML file
    pub file: String,
    /// Link as written
    pub link: String,
    /// Root-relative resolved path
    pub resolved: String,
}

/// Result of a link audit
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    pub files_checked: usize,
    pub links_checked: usize,
    pub problems: Vec<BrokenLink>,
}

impl AuditReport {
    /// Builds the report from every finding of the run
    pub fn from_findings(root: &Path, files_checked: usize, findings: &[LinkFinding]) -> Self {
        let problems = findings
            .iter()
            .filter(|f| f.is_broken())
            .map(|f| BrokenLink {
                file: relative_display(root, f.file()),
                link: f.link().to_string(),
                resolved: relative_display(root, f.resolved()),
            })
            .collect();

        Self {
            files_checked,
            links_checked: findings.len(),
            problems,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }

    /// Failure on any broken reference
    pub fn exit_code(&self) -> ExitCode {
        if self.is_clean() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

    /// One-line success summary
    pub fn summary(&self) -> String {
        format!(
            "OK: {} HTML files checked, no broken local links/assets.",
            self.files_checked
        )
    }

    /// Header plus one line per broken reference
    pub fn problem_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.problems.len() + 1);
        lines.push("Broken local links/assets detected:".to_string());
        lines.extend(
            self.problems
                .iter()
                .map(|p| format!("- {} -> {} (resolved: {})", p.file, p.link, p.resolved)),
        );
        lines
    }
}
