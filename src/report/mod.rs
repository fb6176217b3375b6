//! Report rendering.
//!
//! - `markdown`: the pull request comment
//! - `json`: machine-readable summary
//! - `format`: cell formatting shared by both

pub mod format;
pub mod json;
pub mod markdown;

// Re-export main functions
pub use format::{format_change, format_kb, format_threshold};
pub use json::{read_summary, to_summary, write_summary, SizeReport};
pub use markdown::{artifact_link, render_report, ReportOptions};

use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), String> {
    if path.as_os_str().is_empty() {
        return Err("Path is empty".to_string());
    }

    if path.exists() && path.is_dir() {
        return Err(format!("Path is a directory: {}", path.display()));
    }

    Ok(())
}

/// Create the parent directory of an output file if it is missing
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Cannot create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}
