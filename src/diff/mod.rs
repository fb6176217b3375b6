//! Artifact tree diffing and classification.
//!
//! Compares a base and a head build tree, producing one delta per artifact,
//! then sorts those deltas into the report's critical and significant
//! sections.
//!
//! # Example
//! ```ignore
//! use bundle_sizebot::diff::{classify, diff_trees, Thresholds};
//!
//! let deltas = diff_trees(base_root, head_root, "js")?;
//! let result = classify(&deltas, &allow_list, Thresholds::from(&config))?;
//! ```

mod classify;
mod engine;
mod schema;

// Public API exports
pub use classify::{classify, Thresholds};
pub use engine::diff_trees;
pub use schema::{sort_by_raw_change, ChangeRatio, ClassificationResult, Delta};
