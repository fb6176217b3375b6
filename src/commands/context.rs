//! Run context: which trees to compare and which commits they came from.

use crate::utils::config::COMMIT_SHA_FILE;
use crate::utils::error::ContextError;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything the core needs from the CI environment
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext {
    pub base_root: PathBuf,
    pub head_root: PathBuf,
    pub base_commit: String,
    pub head_commit: String,
}

impl RunContext {
    /// Resolve commits from the `COMMIT_SHA` marker in each build root
    ///
    /// # Errors
    /// * `ContextError::MarkerUnreadable` - marker file missing or unreadable
    /// * `ContextError::EmptyMarker` - marker contains only whitespace
    pub fn load(
        base_root: impl Into<PathBuf>,
        head_root: impl Into<PathBuf>,
    ) -> Result<Self, ContextError> {
        let base_root = base_root.into();
        let head_root = head_root.into();

        let head_commit = read_commit_marker(&head_root)?;
        let base_commit = read_commit_marker(&base_root)?;

        Ok(Self {
            base_root,
            head_root,
            base_commit,
            head_commit,
        })
    }

    /// Like `load`, but explicit commits skip reading the matching marker
    pub fn load_with_overrides(
        base_root: impl Into<PathBuf>,
        head_root: impl Into<PathBuf>,
        base_commit: Option<String>,
        head_commit: Option<String>,
    ) -> Result<Self, ContextError> {
        let base_root = base_root.into();
        let head_root = head_root.into();

        let head_commit = match head_commit {
            Some(commit) => commit,
            None => read_commit_marker(&head_root)?,
        };
        let base_commit = match base_commit {
            Some(commit) => commit,
            None => read_commit_marker(&base_root)?,
        };

        Ok(Self {
            base_root,
            head_root,
            base_commit,
            head_commit,
        })
    }
}

/// Read and trim `<root>/COMMIT_SHA`
pub fn read_commit_marker(root: &Path) -> Result<String, ContextError> {
    let path = root.join(COMMIT_SHA_FILE);
    let contents = fs::read_to_string(&path).map_err(|source| ContextError::MarkerUnreadable {
        path: path.clone(),
        source,
    })?;

    let commit = contents.trim();
    if commit.is_empty() {
        return Err(ContextError::EmptyMarker(path));
    }

    debug!("{} -> {}", path.display(), commit);
    Ok(commit.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_trims_markers() {
        let base = tempfile::tempdir().unwrap();
        let head = tempfile::tempdir().unwrap();
        fs::write(base.path().join(COMMIT_SHA_FILE), "abc123\n").unwrap();
        fs::write(head.path().join(COMMIT_SHA_FILE), "  def456 \n").unwrap();

        let ctx = RunContext::load(base.path(), head.path()).unwrap();
        assert_eq!(ctx.base_commit, "abc123");
        assert_eq!(ctx.head_commit, "def456");
        assert_eq!(ctx.head_root, head.path());
    }

    #[test]
    fn test_missing_marker() {
        let base = tempfile::tempdir().unwrap();
        let head = tempfile::tempdir().unwrap();
        fs::write(head.path().join(COMMIT_SHA_FILE), "def456").unwrap();

        let err = RunContext::load(base.path(), head.path()).unwrap_err();
        assert!(matches!(err, ContextError::MarkerUnreadable { .. }));
    }

    #[test]
    fn test_empty_marker() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(COMMIT_SHA_FILE), "\n\n").unwrap();
        assert!(matches!(
            read_commit_marker(dir.path()),
            Err(ContextError::EmptyMarker(_))
        ));
    }

    #[test]
    fn test_overrides_skip_markers() {
        let base = tempfile::tempdir().unwrap();
        let head = tempfile::tempdir().unwrap();
        fs::write(base.path().join(COMMIT_SHA_FILE), "from-file").unwrap();

        let ctx = RunContext::load_with_overrides(
            base.path(),
            head.path(),
            None,
            Some("cli-head".to_string()),
        )
        .unwrap();
        assert_eq!(ctx.base_commit, "from-file");
        assert_eq!(ctx.head_commit, "cli-head");
    }
}
