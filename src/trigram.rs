//! Sliding-window trigram counting over raw bytes
//!
//! A trigram is three consecutive bytes. Scanning a buffer of length `n`
//! produces `n - 2` occurrences (none when `n < 3`), accumulated per distinct
//! trigram. The key space is bounded by 256³, so the table never grows past
//! 16,777,216 entries regardless of input size.

use crate::error::{Result, TrigramError};
use crate::json_output::TrigramRecord;
use fnv::FnvHashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Three consecutive byte values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trigram {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Trigram {
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }
}

impl From<[u8; 3]> for Trigram {
    fn from([x, y, z]: [u8; 3]) -> Self {
        Self { x, y, z }
    }
}

/// Occurrence count plus the window index where the trigram first appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Occurrences {
    count: u64,
    first_seen: usize,
}

/// Frequency count per distinct trigram
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: FnvHashMap<Trigram, Occurrences>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct trigrams
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence count for a trigram (None if never seen)
    pub fn get(&self, trigram: &Trigram) -> Option<u64> {
        self.counts.get(trigram).map(|o| o.count)
    }

    /// Total occurrences across all trigrams
    pub fn total(&self) -> u64 {
        self.counts.values().map(|o| o.count).sum()
    }

    /// Iterate over (trigram, count) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Trigram, u64)> {
        self.counts.iter().map(|(t, o)| (t, o.count))
    }

    fn record(&mut self, trigram: Trigram, index: usize) {
        self.counts
            .entry(trigram)
            .or_insert(Occurrences {
                count: 0,
                first_seen: index,
            })
            .count += 1;
    }
}

/// Counts every trigram in `data` using a sliding window of width 3
///
/// # Example
/// ```
/// use trigram_scan::trigram::{scan, Trigram};
///
/// let table = scan(b"aaaa");
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.get(&Trigram::new(b'a', b'a', b'a')), Some(2));
/// ```
pub fn scan(data: &[u8]) -> FrequencyTable {
    let mut table = FrequencyTable::new();

    // windows(3) yields nothing for inputs shorter than 3 bytes
    for (index, window) in data.windows(3).enumerate() {
        table.record(Trigram::new(window[0], window[1], window[2]), index);
    }

    table
}

/// Ratio of distinct trigrams to total occurrences
///
/// Close to 1.0 for high-entropy data, close to 0.0 for repetitive data.
pub fn coverage(table: &FrequencyTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }

    table.len() as f64 / table.total() as f64
}

/// Returns the `max_count` most frequent trigrams, highest count first
///
/// Equal counts are ordered by first occurrence in the scanned input, so the
/// output is reproducible for identical input.
pub fn top_n(table: &FrequencyTable, max_count: usize) -> Vec<TrigramRecord> {
    let mut entries: Vec<_> = table.counts.iter().collect();

    entries.sort_by(|(_, a), (_, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    entries
        .into_iter()
        .take(max_count)
        .map(|(trigram, occ)| TrigramRecord::new(*trigram, occ.count))
        .collect()
}

/// Reads `path` fully into memory, scans it, and returns the top `max_count` trigrams
pub fn run<P: AsRef<Path>>(path: P, max_count: usize) -> Result<Vec<TrigramRecord>> {
    let path = path.as_ref();

    let data = fs::read(path).map_err(|source| TrigramError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = data.len(), "read input file");

    let table = scan(&data);
    debug!(
        distinct = table.len(),
        total = table.total(),
        coverage = coverage(&table),
        "scanned trigrams"
    );

    let records = top_n(&table, max_count);
    info!(selected = records.len(), max_count, "selected top trigrams");

    Ok(records)
}
