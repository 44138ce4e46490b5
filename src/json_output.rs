//! JSON output format for trigram reports
//!
//! The report is a pretty-printed array of `{"x", "y", "z", "count"}` objects
//! in descending count order.

use crate::error::{Result, TrigramError};
use crate::trigram::Trigram;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default report file name, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "trigrams.json";

/// A single trigram and how often it occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrigramRecord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
    pub count: u64,
}

impl TrigramRecord {
    pub fn new(trigram: Trigram, count: u64) -> Self {
        Self {
            x: trigram.x,
            y: trigram.y,
            z: trigram.z,
            count,
        }
    }

    pub fn trigram(&self) -> Trigram {
        Trigram::new(self.x, self.y, self.z)
    }
}

/// Serialize records as a 2-space indented JSON array
pub fn to_json(records: &[TrigramRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, replacing any existing file
pub fn write_records<P: AsRef<Path>>(path: P, records: &[TrigramRecord]) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| TrigramError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), records = records.len(), "wrote report");
    Ok(())
}

/// Load a previously written report
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<TrigramRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| TrigramError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(serde_json::from_str(&contents)?)
}

/// Scale each count into (0, 1] relative to the largest count
///
/// The divisor is floored at 1 so an empty or all-zero input never divides by zero.
pub fn intensities(records: &[TrigramRecord]) -> Vec<f32> {
    let max_count = records.iter().map(|r| r.count).max().unwrap_or(0).max(1);

    records
        .iter()
        .map(|r| r.count as f32 / max_count as f32)
        .collect()
}
