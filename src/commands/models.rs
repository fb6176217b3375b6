use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareArgs {
    /// Base (before) build tree
    pub base_root: PathBuf,

    /// Head (after) build tree
    pub head_root: PathBuf,

    /// Optional configuration file (TOML)
    pub config_file: Option<PathBuf>,

    /// Override for the critical threshold (fraction, e.g. 0.02)
    pub critical_threshold: Option<f64>,

    /// Override for the significance threshold (fraction, e.g. 0.002)
    pub significance_threshold: Option<f64>,

    /// Extra allow-listed artifacts, appended after the configured ones
    pub allow: Vec<String>,

    /// Drop the configured allow-list before applying `allow`
    pub no_default_allow_list: bool,

    /// Override for the artifact extension
    pub extension: Option<String>,

    /// Override for the deep-link template
    pub link_template: Option<String>,

    /// Base commit; read from the base `COMMIT_SHA` marker when absent
    pub base_commit: Option<String>,

    /// Head commit; read from the head `COMMIT_SHA` marker when absent
    pub head_commit: Option<String>,

    /// Write the markdown report here
    pub output: Option<PathBuf>,

    /// Write the JSON summary here
    pub json: Option<PathBuf>,

    /// `owner/name` of the repository to comment on
    pub github_repo: Option<String>,

    /// Pull request number to comment on
    pub pull_request: Option<u64>,

    /// Token used for the pull request comment
    #[serde(skip_serializing)]
    pub github_token: Option<String>,

    /// Source files changed by the pull request
    pub changed_files: Vec<String>,

    /// Only report when `github_repo` is this repository
    pub upstream_repo: Option<String>,

    /// Fail instead of skipping when a `COMMIT_SHA` marker is unreadable
    pub strict_markers: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            base_root: PathBuf::from("base-build"),
            head_root: PathBuf::from("build"),
            config_file: None,
            critical_threshold: None,
            significance_threshold: None,
            allow: Vec::new(),
            no_default_allow_list: false,
            extension: None,
            link_template: None,
            base_commit: None,
            head_commit: None,
            output: None,
            json: None,
            github_repo: None,
            pull_request: None,
            github_token: None,
            changed_files: Vec::new(),
            upstream_repo: None,
            strict_markers: false,
        }
    }
}
