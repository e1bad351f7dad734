//! HTML file discovery for the link auditor

use super::WalkError;
use crate::utils::relative_display;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Returns true if `relative` is one of `skip_dirs` or lies beneath one
fn is_skipped(relative: &str, skip_dirs: &[String]) -> bool {
    skip_dirs.iter().any(|dir| {
        relative == dir
            || relative
                .strip_prefix(dir.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    })
}

/// Collects every `*.html` file under `root`, leaving out `skip_dirs`
/// (root-relative, `/`-separated)
pub fn collect_html_files(root: &Path, skip_dirs: &[String]) -> Result<Vec<PathBuf>, WalkError> {
    if !root.is_dir() {
        return Err(WalkError::DirectoryNotFound(root.display().to_string()));
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = relative_display(root, entry.path());
            let skipped = is_skipped(&relative, skip_dirs);
            if skipped {
                debug!(path = %relative, "skipping");
            }
            !skipped
        });

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(".html") {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_matches_exact_and_nested() {
        let skip = vec!["assets/img/_stage1_backup".to_string(), ".git".to_string()];
        assert!(is_skipped(".git", &skip));
        assert!(is_skipped("assets/img/_stage1_backup/old/page.html", &skip));
        assert!(!is_skipped("assets/img/_stage1_backup2", &skip));
        assert!(!is_skipped("docs/.git-notes.html", &skip));
    }
}
