//! Threshold classification.
//!
//! Splits deltas into the always-visible critical section and the collapsed
//! significant section.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::schema::{sort_by_raw_change, ClassificationResult, Delta};
use crate::utils::error::ClassifyError;
use crate::utils::settings::SizeBotConfig;

/// The two severity cut-offs, as fractions of the base size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub critical: f64,
    pub significance: f64,
}

impl From<&SizeBotConfig> for Thresholds {
    fn from(config: &SizeBotConfig) -> Self {
        Self {
            critical: config.critical_threshold,
            significance: config.significance_threshold,
        }
    }
}

/// Classify deltas into critical and significant sections
///
/// * `critical` starts with every allow-listed artifact in allow-list order,
///   whatever its change, followed by every other artifact whose raw change
///   exceeds `thresholds.critical`.
/// * `significant` holds every artifact whose raw change exceeds
///   `thresholds.significance`, allow-listed ones included.
///
/// Both threshold-driven lists are ordered by raw change, descending.
///
/// # Errors
/// * `ClassifyError::MissingCriticalArtifact` - an allow-listed path has no delta
pub fn classify(
    deltas: &[Delta],
    allow_list: &[String],
    thresholds: Thresholds,
) -> Result<ClassificationResult, ClassifyError> {
    let by_path: HashMap<&str, &Delta> = deltas.iter().map(|d| (d.path.as_str(), d)).collect();

    let mut critical = Vec::with_capacity(allow_list.len());
    for path in allow_list {
        let delta = by_path
            .get(path.as_str())
            .ok_or_else(|| ClassifyError::MissingCriticalArtifact(path.clone()))?;
        critical.push((*delta).clone());
    }

    let mut sorted = deltas.to_vec();
    sort_by_raw_change(&mut sorted);

    let pinned: HashSet<&str> = allow_list.iter().map(String::as_str).collect();
    let mut significant = Vec::new();

    for delta in sorted {
        let is_significant = delta.raw_change.exceeds(thresholds.significance);

        if !pinned.contains(delta.path.as_str()) && delta.raw_change.exceeds(thresholds.critical) {
            critical.push(delta.clone());
        }

        if is_significant {
            significant.push(delta);
        }
    }

    debug!(
        "Classified {} deltas: {} critical, {} significant",
        deltas.len(),
        critical.len(),
        significant.len()
    );

    Ok(ClassificationResult {
        critical,
        significant,
    })
}
