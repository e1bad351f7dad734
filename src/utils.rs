//! Small path helpers shared by the reports

use std::path::{Component, Path, PathBuf};

/// Renders `path` relative to `root` with `/` separators.
///
/// Paths outside `root` are rendered with leading `..` components, the same
/// way a shell `realpath --relative-to` would.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let root = normalize_lexically(root);
    let path = normalize_lexically(path);

    if let Ok(rel) = path.strip_prefix(&root) {
        return to_posix(rel);
    }

    let root_parts: Vec<Component<'_>> = root.components().collect();
    let path_parts: Vec<Component<'_>> = path.components().collect();
    let shared = root_parts
        .iter()
        .zip(&path_parts)
        .take_while(|(a, b)| a == b)
        .count();

    if shared == 0 {
        return to_posix(&path);
    }

    let mut rel = PathBuf::new();
    for _ in shared..root_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[shared..] {
        rel.push(part.as_os_str());
    }
    to_posix(&rel)
}

/// Joins the components of `path` with `/`
pub fn to_posix(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::RootDir => Some(String::new()),
            Component::CurDir => None,
            other => Some(other.as_os_str().to_string_lossy().into_owned()),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Folds `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                ) && out.pop();
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
