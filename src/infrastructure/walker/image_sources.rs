//! Source discovery for the image deriver

use super::WalkError;
use crate::domain::services::{PathDecision, SelectionRules};
use crate::utils::relative_display;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Collects the sorted source images under `root/source_dir`.
///
/// Directory rules are checked against paths relative to `root`, not to
/// `source_dir`.
pub fn collect_sources(
    root: &Path,
    source_dir: &Path,
    recursive: bool,
    rules: &SelectionRules,
) -> Result<Vec<PathBuf>, WalkError> {
    let source_dir = root.join(source_dir);
    if !source_dir.is_dir() {
        return Err(WalkError::DirectoryNotFound(source_dir.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let walker = WalkDir::new(&source_dir)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            let relative = relative_display(root, entry.path());
            match rules.classify_dir(&name, &relative) {
                PathDecision::Excluded(reason) => {
                    debug!(path = %relative, reason = reason.code(), "directory excluded");
                    false
                }
                _ => true,
            }
        });

    let mut sources = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match rules.classify_file(&name) {
            PathDecision::Source => sources.push(entry.into_path()),
            PathDecision::Excluded(reason) => {
                debug!(file = %name, reason = reason.code(), "not a source");
            }
            PathDecision::Ignored => {}
        }
    }

    // Whole-path byte order, so `a-b/x.jpg` sorts before `a/x.jpg`
    sources.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    Ok(sources)
}
