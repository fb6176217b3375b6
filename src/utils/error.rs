//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while indexing or measuring artifacts
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to walk {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl ProbeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProbeError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during classification
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error(
        "Missing expected bundle. If this was an intentional change to the build \
         configuration, update the allow-list accordingly: {0}"
    )]
    MissingCriticalArtifact(String),
}

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Config TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Errors that can occur while resolving the run context
#[derive(Error, Debug)]
pub enum ContextError {
    #[error(
        "Failed to read build artifacts at {path}: {source}. It's possible a build \
         configuration has changed upstream"
    )]
    MarkerUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Commit marker is empty: {0}")]
    EmptyMarker(PathBuf),
}

/// Errors that can occur while publishing a report
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("GitHub rejected the comment: {0}")]
    Rejected(String),

    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur during JSON summary output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
