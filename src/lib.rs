//! trigram-scan - Frequency analysis of three-byte sequences in binary files
//!
//! This library slides a 3-byte window over a file's contents, counts each
//! distinct trigram, and reports the most frequent ones as JSON records.

pub mod cli;
pub mod error;
pub mod json_output;
pub mod trigram;

pub use error::{Result, TrigramError};
pub use json_output::TrigramRecord;
pub use trigram::{coverage, run, scan, top_n, FrequencyTable, Trigram};
