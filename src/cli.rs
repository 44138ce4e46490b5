//! CLI argument parsing for trigram-scan

use crate::error::{Result, TrigramError};
use crate::json_output::DEFAULT_OUTPUT;
use clap::Parser;
use std::path::PathBuf;

/// Default number of trigram records to report
pub const DEFAULT_MAX: i64 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "trigram-scan")]
#[command(version)]
#[command(about = "Report the most frequent three-byte sequences in a binary file", long_about = None)]
pub struct Cli {
    /// Input binary file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Max number of trigrams to output
    #[arg(
        long = "max",
        value_name = "N",
        default_value_t = DEFAULT_MAX,
        allow_negative_numbers = true
    )]
    pub max: i64,

    /// Report file to write
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

impl Cli {
    /// Validate `--max` and convert it to a record limit
    pub fn validate_max(&self) -> Result<usize> {
        usize::try_from(self.max).map_err(|_| {
            TrigramError::InvalidArgument(format!(
                "--max must be a non-negative integer, got {}",
                self.max
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_file() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin"]);
        assert_eq!(cli.file, PathBuf::from("data.bin"));
    }

    #[test]
    fn test_cli_requires_file() {
        assert!(Cli::try_parse_from(["trigram-scan"]).is_err());
    }

    #[test]
    fn test_cli_max_default() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin"]);
        assert_eq!(cli.max, 10_000);
        assert_eq!(cli.validate_max().unwrap(), 10_000);
    }

    #[test]
    fn test_cli_max_custom() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin", "--max", "25"]);
        assert_eq!(cli.validate_max().unwrap(), 25);
    }

    #[test]
    fn test_cli_max_zero() {
        let cli = Cli::parse_from(["trigram-scan", "--max", "0", "data.bin"]);
        assert_eq!(cli.validate_max().unwrap(), 0);
    }

    #[test]
    fn test_cli_max_negative_rejected() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin", "--max", "-5"]);
        assert_eq!(cli.max, -5);

        let err = cli.validate_max().unwrap_err();
        assert!(matches!(err, TrigramError::InvalidArgument(_)));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_cli_max_not_a_number() {
        assert!(Cli::try_parse_from(["trigram-scan", "data.bin", "--max", "lots"]).is_err());
    }

    #[test]
    fn test_cli_output_default() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin"]);
        assert_eq!(cli.output, PathBuf::from("trigrams.json"));
    }

    #[test]
    fn test_cli_output_custom() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin", "-o", "out/report.json"]);
        assert_eq!(cli.output, PathBuf::from("out/report.json"));
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["trigram-scan", "data.bin"]);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_debug_flag() {
        let cli = Cli::parse_from(["trigram-scan", "--debug", "data.bin"]);
        assert!(cli.debug);
    }
}
