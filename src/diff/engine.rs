//! Core diff engine implementation.
//! Pairs artifacts from the base and head trees and measures both sides.

use crate::artifacts::{index_artifacts, measure, SizeSample};
use crate::utils::error::ProbeError;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::io;
use std::path::Path;

use super::schema::Delta;

/// Compare two build trees
///
/// Produces exactly one `Delta` for every artifact path present in either
/// tree. Head-only paths are reported as new, base-only paths as deleted.
///
/// Measurements run in parallel; the returned order is head paths (sorted)
/// followed by base-only paths (sorted). Callers that display deltas must
/// sort them explicitly.
///
/// # Errors
/// * `ProbeError` - either tree cannot be indexed, a head artifact cannot be
///   measured, or a deleted artifact cannot be measured in base
///
/// # Example
/// ```ignore
/// let deltas = diff_trees(Path::new("base-build"), Path::new("build"), "js")?;
/// ```
pub fn diff_trees(
    base_root: &Path,
    head_root: &Path,
    extension: &str,
) -> Result<Vec<Delta>, ProbeError> {
    // Step 1: Index both trees
    let head_paths = index_artifacts(head_root, extension)?;
    let base_paths = index_artifacts(base_root, extension)?;
    info!(
        "Found {} head artifacts and {} base artifacts",
        head_paths.len(),
        base_paths.len()
    );

    // Step 2: Every head artifact is either changed or new
    let head_list: Vec<&String> = head_paths.iter().collect();
    let mut deltas = head_list
        .par_iter()
        .map(|path| -> Result<Delta, ProbeError> {
            let head = measure(&head_root.join(path.as_str()))?;
            let delta = match probe_base(base_root, path) {
                Some(base) => Delta::changed(path.as_str(), base, head),
                None => Delta::added(path.as_str(), head),
            };
            debug!("{}: {:?} -> {:?}", path, delta.base, delta.head);
            Ok(delta)
        })
        .collect::<Result<Vec<_>, ProbeError>>()?;

    // Step 3: Base artifacts that head no longer has
    let deleted_list: Vec<&String> = base_paths.difference(&head_paths).collect();
    let deleted = deleted_list
        .par_iter()
        .map(|path| -> Result<Delta, ProbeError> {
            let base = measure(&base_root.join(path.as_str()))?;
            debug!("{}: deleted ({} bytes)", path, base.raw_bytes);
            Ok(Delta::deleted(path.as_str(), base))
        })
        .collect::<Result<Vec<_>, ProbeError>>()?;

    deltas.extend(deleted);
    Ok(deltas)
}

/// Measure the base-side copy of a head artifact
///
/// Any failure means "no base artifact", so the head copy is reported as new.
/// Failures other than NotFound are logged since they may hide a real
/// I/O problem.
fn probe_base(base_root: &Path, path: &str) -> Option<SizeSample> {
    match measure(&base_root.join(path)) {
        Ok(sample) => Some(sample),
        Err(ProbeError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => None,
        Err(err) => {
            warn!(
                "Could not measure base artifact {} ({}); reporting it as a new file",
                path, err
            );
            None
        }
    }
}
