//! Artifact index: the set of artifact paths beneath a build root.

use crate::utils::error::ProbeError;
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

/// Sorted set of artifact paths, relative to the root they were indexed from
pub type ArtifactIndex = BTreeSet<String>;

/// Recursively collect every file under `root` with the given extension
///
/// Paths come back relative to `root` with `/` separators. Matches what a
/// `**/*.ext` glob would: symlinks to files count, symlinked directories are
/// not descended, and dot-files and dot-directories are skipped. An empty
/// tree is an empty index, not an error.
///
/// # Errors
/// * `ProbeError::Io` - `root` does not exist or cannot be stat'ed
/// * `ProbeError::NotADirectory` - `root` is a file
/// * `ProbeError::Walk` - a directory under `root` cannot be listed
pub fn index_artifacts(root: &Path, extension: &str) -> Result<ArtifactIndex, ProbeError> {
    let metadata = std::fs::metadata(root).map_err(|e| ProbeError::io(root, e))?;
    if !metadata.is_dir() {
        return Err(ProbeError::NotADirectory(root.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let mut index = ArtifactIndex::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|source| ProbeError::Walk {
            root: root.to_path_buf(),
            source,
        })?;

        if !is_artifact_file(&entry) {
            continue;
        }

        let matches = entry
            .path()
            .extension()
            .map(|ext| ext == extension)
            .unwrap_or(false);
        if !matches {
            continue;
        }

        // WalkDir only yields paths beneath root
        if let Ok(rel_path) = entry.path().strip_prefix(root) {
            index.insert(normalize_path(rel_path));
        }
    }

    debug!("Indexed {} artifacts under {}", index.len(), root.display());
    Ok(index)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Regular file, or a symlink that resolves to one
fn is_artifact_file(entry: &DirEntry) -> bool {
    if entry.file_type().is_file() {
        return true;
    }
    entry.path_is_symlink()
        && std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false)
}

/// Render a relative path with forward-slash separators
pub fn normalize_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_index_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("react-dom/cjs")).unwrap();
        fs::write(root.join("react-dom/cjs/react-dom.js"), "x").unwrap();
        fs::write(root.join("react-dom/package.json"), "{}").unwrap();
        fs::write(root.join("top.js"), "y").unwrap();
        fs::write(root.join("COMMIT_SHA"), "abc").unwrap();

        let index = index_artifacts(root, "js").unwrap();
        let paths: Vec<_> = index.into_iter().collect();
        assert_eq!(paths, vec!["react-dom/cjs/react-dom.js", "top.js"]);
    }

    #[test]
    fn test_index_accepts_dotted_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.mjs"), "x").unwrap();

        let index = index_artifacts(dir.path(), ".mjs").unwrap();
        assert!(index.contains("a.mjs"));
    }

    #[test]
    fn test_index_empty_tree() {
        let dir = tempfile::tempdir().unwrap();
        assert!(index_artifacts(dir.path(), "js").unwrap().is_empty());
    }

    #[test]
    fn test_index_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let result = index_artifacts(&dir.path().join("nope"), "js");
        assert!(matches!(result, Err(ProbeError::Io { .. })));
    }

    #[test]
    fn test_index_root_is_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.js");
        fs::write(&file, "x").unwrap();
        assert!(matches!(
            index_artifacts(&file, "js"),
            Err(ProbeError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_directory_named_like_artifact_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("weird.js")).unwrap();
        fs::write(dir.path().join("weird.js/inner.js"), "x").unwrap();

        let index = index_artifacts(dir.path(), "js").unwrap();
        assert_eq!(index.len(), 1);
        assert!(index.contains("weird.js/inner.js"));
    }

    #[test]
    fn test_dot_entries_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".cache")).unwrap();
        fs::write(dir.path().join(".cache/stale.js"), "x").unwrap();
        fs::write(dir.path().join(".eslintrc.js"), "x").unwrap();
        fs::write(dir.path().join("kept.js"), "x").unwrap();

        let index = index_artifacts(dir.path(), "js").unwrap();
        let paths: Vec<_> = index.into_iter().collect();
        assert_eq!(paths, vec!["kept.js"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_is_indexed() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("real")).unwrap();
        fs::write(dir.path().join("real/bundle.js"), "x").unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("real/bundle.js"),
            dir.path().join("alias.js"),
        )
        .unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linked-dir"))
            .unwrap();

        let index = index_artifacts(dir.path(), "js").unwrap();
        let paths: Vec<_> = index.into_iter().collect();
        assert_eq!(paths, vec!["alias.js", "real/bundle.js"]);
    }

    #[test]
    fn test_normalize_path() {
        let path: std::path::PathBuf = ["a", "b", "c.js"].iter().collect();
        assert_eq!(normalize_path(&path), "a/b/c.js");
    }
}
