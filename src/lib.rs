//! Bundle Sizebot
//!
//! Compares two directory trees of build artifacts ("base" and "head"),
//! measures raw and gzip size changes per artifact, classifies them against
//! two thresholds and renders a markdown report for a pull request.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install bundle-sizebot
//! sizebot compare --base base-build --head build
//! ```
//!
//! ## Library use
//!
//! ```ignore
//! use bundle_sizebot::diff::{classify, diff_trees, Thresholds};
//! use bundle_sizebot::report::{render_report, ReportOptions};
//!
//! let deltas = diff_trees(base_root, head_root, "js")?;
//! let result = classify(&deltas, &allow_list, thresholds)?;
//! let markdown = render_report("base-sha", "head-sha", &result, &options);
//! ```

pub mod artifacts;
pub mod commands;
pub mod diff;
pub mod report;
pub mod utils;
