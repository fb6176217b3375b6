//! Report publishers.
//!
//! The core hands back one markdown string; a `Publisher` decides where it
//! goes.

use crate::report::{ensure_parent_dir, validate_path};
use crate::utils::config::{DEFAULT_GITHUB_API, DEFAULT_HTTP_TIMEOUT};
use crate::utils::error::PublishError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;

/// Destination for a rendered report
pub trait Publisher {
    fn publish(&self, report: &str) -> Result<(), PublishError>;
}

/// Prints the report to stdout
pub struct StdoutPublisher;

impl Publisher for StdoutPublisher {
    fn publish(&self, report: &str) -> Result<(), PublishError> {
        println!("{}", report);
        Ok(())
    }
}

/// Writes the report to a file
pub struct FilePublisher {
    path: PathBuf,
}

impl FilePublisher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Publisher for FilePublisher {
    fn publish(&self, report: &str) -> Result<(), PublishError> {
        validate_path(&self.path).map_err(PublishError::InvalidPath)?;
        ensure_parent_dir(&self.path).map_err(PublishError::InvalidPath)?;

        fs::write(&self.path, report)?;
        info!("Report written to {} ({} bytes)", self.path.display(), report.len());
        Ok(())
    }
}

/// Posts the report as a pull request comment
pub struct GithubCommentPublisher {
    client: Client,
    api_base: String,
    repo: String,
    pull_request: u64,
    token: String,
}

impl GithubCommentPublisher {
    /// Create a publisher for `owner/name` pull request `pull_request`
    pub fn new(
        repo: impl Into<String>,
        pull_request: u64,
        token: impl Into<String>,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(concat!("bundle-sizebot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(PublishError::RequestFailed)?;

        Ok(Self {
            client,
            api_base: DEFAULT_GITHUB_API.to_string(),
            repo: repo.into(),
            pull_request,
            token: token.into(),
        })
    }

    /// Point at a GitHub Enterprise (or test) API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    fn comments_url(&self) -> String {
        format!(
            "{}/repos/{}/issues/{}/comments",
            self.api_base.trim_end_matches('/'),
            self.repo,
            self.pull_request
        )
    }
}

impl Publisher for GithubCommentPublisher {
    fn publish(&self, report: &str) -> Result<(), PublishError> {
        let url = self.comments_url();
        info!("Posting size report to {}#{}", self.repo, self.pull_request);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&serde_json::json!({ "body": report }))
            .send()
            .map_err(PublishError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(PublishError::Rejected(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        Ok(())
    }
}
