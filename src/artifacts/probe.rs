//! Size probe: raw and gzip size of a single artifact.

use crate::utils::error::ProbeError;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;

/// Raw and compressed size of one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSample {
    /// Size on disk in bytes
    pub raw_bytes: u64,

    /// Size of the gzip stream in bytes
    pub compressed_bytes: u64,
}

impl SizeSample {
    pub fn new(raw_bytes: u64, compressed_bytes: u64) -> Self {
        Self {
            raw_bytes,
            compressed_bytes,
        }
    }
}

/// Counts bytes written without keeping them
#[derive(Default)]
struct ByteCounter {
    count: u64,
}

impl Write for ByteCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.count += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Measure a file
///
/// Raw size comes from metadata; gzip size from streaming the contents
/// through a default-level encoder.
///
/// # Errors
/// * `ProbeError::Io` - file is missing or unreadable
pub fn measure(path: &Path) -> Result<SizeSample, ProbeError> {
    let raw_bytes = std::fs::metadata(path)
        .map_err(|e| ProbeError::io(path, e))?
        .len();

    let file = File::open(path).map_err(|e| ProbeError::io(path, e))?;
    let compressed_bytes =
        gzip_size(BufReader::new(file)).map_err(|e| ProbeError::io(path, e))?;

    Ok(SizeSample::new(raw_bytes, compressed_bytes))
}

/// Gzip size of everything readable from `reader`
pub fn gzip_size(mut reader: impl io::Read) -> io::Result<u64> {
    let mut encoder = GzEncoder::new(ByteCounter::default(), Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    let counter = encoder.finish()?;
    Ok(counter.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_measure_reports_raw_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.js");
        fs::write(&path, "a".repeat(1000)).unwrap();

        let sample = measure(&path).unwrap();
        assert_eq!(sample.raw_bytes, 1000);
        // Highly repetitive input compresses well
        assert!(sample.compressed_bytes > 0);
        assert!(sample.compressed_bytes < 100);
    }

    #[test]
    fn test_measure_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.js");
        fs::write(&path, "").unwrap();

        let sample = measure(&path).unwrap();
        assert_eq!(sample.raw_bytes, 0);
        // Header and trailer are still emitted
        assert!(sample.compressed_bytes >= 18);
    }

    #[test]
    fn test_measure_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = measure(&dir.path().join("gone.js")).unwrap_err();
        match err {
            ProbeError::Io { source, .. } => {
                assert_eq!(source.kind(), io::ErrorKind::NotFound)
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gzip_size_is_deterministic() {
        let data = b"function f(){return 1}".repeat(50);
        let a = gzip_size(&data[..]).unwrap();
        let b = gzip_size(&data[..]).unwrap();
        assert_eq!(a, b);
    }
}
