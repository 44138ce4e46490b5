//! Error types for trigram scanning and output

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while scanning a file or writing the report
#[derive(Error, Debug)]
pub enum TrigramError {
    /// Input path missing, unreadable, or a directory
    #[error("Failed to read input file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to write output file {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for trigram operations
pub type Result<T> = std::result::Result<T, TrigramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_message_names_path() {
        let err = TrigramError::FileAccess {
            path: PathBuf::from("/no/such/file.bin"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/no/such/file.bin"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = TrigramError::InvalidArgument("--max must be >= 0, got -1".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --max must be >= 0, got -1");
    }
}
