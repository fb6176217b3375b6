//! JSON summary output.
//!
//! A machine-readable companion to the markdown report. Unlike the
//! markdown, it carries a generation timestamp.

use crate::diff::{ClassificationResult, Delta, Thresholds};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Serializable size report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    pub version: String,
    pub generated_at: String,
    pub base_commit: String,
    pub head_commit: String,
    pub thresholds: Thresholds,
    pub critical: Vec<Delta>,
    pub significant: Vec<Delta>,
}

/// Build a summary from a classification
pub fn to_summary(
    base_commit: &str,
    head_commit: &str,
    classification: &ClassificationResult,
    thresholds: Thresholds,
) -> SizeReport {
    SizeReport {
        version: SCHEMA_VERSION.to_string(),
        generated_at: Utc::now().to_rfc3339(),
        base_commit: base_commit.to_string(),
        head_commit: head_commit.to_string(),
        thresholds,
        critical: classification.critical.clone(),
        significant: classification.significant.clone(),
    }
}

/// Write a summary to a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_summary(report: &SizeReport, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing JSON summary to: {}", output_path.display());

    super::validate_path(output_path).map_err(OutputError::InvalidPath)?;
    super::ensure_parent_dir(output_path).map_err(OutputError::InvalidPath)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, report).map_err(OutputError::SerializationFailed)?;

    Ok(())
}

/// Read a summary back from disk
pub fn read_summary(input_path: impl AsRef<Path>) -> Result<SizeReport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading summary from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let report: SizeReport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(report)
}
