//! Data structures for artifact size deltas.
//!
//! These types are serialized into the JSON summary, so field names are
//! part of that output's contract.

use crate::artifacts::SizeSample;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Fractional size change between base and head
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ratio", rename_all = "snake_case")]
pub enum ChangeRatio {
    /// `(head - base) / base`
    Finite(f64),

    /// Artifact only exists in head (or grew from zero bytes)
    New,

    /// Artifact only exists in base
    Deleted,
}

impl ChangeRatio {
    /// Relative change from `base` to `head` bytes
    ///
    /// A zero-byte base cannot be divided by: growth from nothing counts as
    /// new, nothing to nothing counts as unchanged.
    pub fn between(base: u64, head: u64) -> Self {
        if base == 0 {
            return if head > 0 {
                ChangeRatio::New
            } else {
                ChangeRatio::Finite(0.0)
            };
        }
        ChangeRatio::Finite((head as f64 - base as f64) / base as f64)
    }

    /// Numeric value with sentinels: `+inf` for new, `-1` for deleted
    pub fn value(&self) -> f64 {
        match self {
            ChangeRatio::Finite(r) => *r,
            ChangeRatio::New => f64::INFINITY,
            ChangeRatio::Deleted => -1.0,
        }
    }

    /// Whether this change is larger than `threshold` in either direction.
    /// Added and deleted artifacts exceed every threshold.
    pub fn exceeds(&self, threshold: f64) -> bool {
        match self {
            ChangeRatio::Finite(r) => r.abs() > threshold,
            ChangeRatio::New | ChangeRatio::Deleted => true,
        }
    }

    /// Descending order: biggest growth first, deletions last
    pub fn cmp_descending(&self, other: &Self) -> Ordering {
        other.value().total_cmp(&self.value())
    }
}

/// Size comparison for one artifact path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    /// Path relative to the build root, `/`-separated
    pub path: String,

    /// Size in the base tree (None = added in head)
    pub base: Option<SizeSample>,

    /// Size in the head tree (None = deleted in head)
    pub head: Option<SizeSample>,

    pub raw_change: ChangeRatio,
    pub compressed_change: ChangeRatio,
}

impl Delta {
    /// Artifact present in both trees
    pub fn changed(path: impl Into<String>, base: SizeSample, head: SizeSample) -> Self {
        Self {
            path: path.into(),
            base: Some(base),
            head: Some(head),
            raw_change: ChangeRatio::between(base.raw_bytes, head.raw_bytes),
            compressed_change: ChangeRatio::between(base.compressed_bytes, head.compressed_bytes),
        }
    }

    /// Artifact only present in head
    pub fn added(path: impl Into<String>, head: SizeSample) -> Self {
        Self {
            path: path.into(),
            base: None,
            head: Some(head),
            raw_change: ChangeRatio::New,
            compressed_change: ChangeRatio::New,
        }
    }

    /// Artifact only present in base
    pub fn deleted(path: impl Into<String>, base: SizeSample) -> Self {
        Self {
            path: path.into(),
            base: Some(base),
            head: None,
            raw_change: ChangeRatio::Deleted,
            compressed_change: ChangeRatio::Deleted,
        }
    }

    /// Base sizes, zero when the artifact is new
    pub fn base_or_zero(&self) -> SizeSample {
        self.base.unwrap_or(SizeSample::new(0, 0))
    }

    /// Head sizes, zero when the artifact was deleted
    pub fn head_or_zero(&self) -> SizeSample {
        self.head.unwrap_or(SizeSample::new(0, 0))
    }
}

/// Report order: raw change descending, path ascending on ties
pub fn sort_by_raw_change(deltas: &mut [Delta]) {
    deltas.sort_by(|a, b| {
        a.raw_change
            .cmp_descending(&b.raw_change)
            .then_with(|| a.path.cmp(&b.path))
    });
}

/// Deltas split into the two report sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Allow-listed artifacts first, then large changes
    pub critical: Vec<Delta>,

    /// Every change above the significance threshold
    pub significant: Vec<Delta>,
}
