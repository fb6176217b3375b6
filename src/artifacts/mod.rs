//! Artifact discovery and measurement.
//!
//! - `index` walks a build tree and collects artifact paths
//! - `probe` measures a single artifact (raw and gzip size)

pub mod index;
pub mod probe;

pub use index::{index_artifacts, normalize_path, ArtifactIndex};
pub use probe::{gzip_size, measure, SizeSample};
