//! Error types for the command-line tools.
//!
//! All errors use thiserror for consistent error handling across the codebase.

use connect4_formats::board::BoardError;
use connect4_formats::opening_book::BookError;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Source and destination name the same file
    #[error("Source and destination must differ: {}", .0.display())]
    SameSourceAndDestination(PathBuf),

    /// Invalid log filter directive
    #[error("Invalid log level '{directive}': {reason}")]
    InvalidLogLevel {
        /// The rejected directive
        directive: String,
        /// Parser message
        reason: String,
    },
}

/// Errors returned by tool commands.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Opening book error
    #[error("Opening book error: {0}")]
    Book(#[from] BookError),

    /// Board error
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Failed to write command output
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::MissingInput(PathBuf::from("book.dat"));
        assert_eq!(err.to_string(), "Input file not found: book.dat");
    }

    #[test]
    fn test_book_error_conversion() {
        let err: ToolError = BookError::ZeroEntries.into();
        assert!(err.to_string().contains("entry count must be positive"));
    }
}
