//! Error types for the opening book format

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading, converting or writing opening books
#[derive(Debug, Error)]
pub enum BookError {
    /// The configured entry count is zero
    #[error("Opening book entry count must be positive")]
    ZeroEntries,

    /// The configured entry count does not fit in a file length
    #[error("Entry count {entries} overflows the maximum file length")]
    EntryCountOverflow {
        /// Configured entry count
        entries: usize,
    },

    /// Source is shorter than the configured entry count requires
    #[error(
        "Truncated opening book: {entries} entries need {expected} bytes, got {actual} bytes"
    )]
    TruncatedSource {
        /// Configured entry count
        entries: usize,
        /// Required length in bytes
        expected: u64,
        /// Actual length in bytes
        actual: u64,
    },

    /// Source is longer than the configured entry count allows
    #[error(
        "Trailing data in opening book: {entries} entries need {expected} bytes, got {actual} bytes"
    )]
    TrailingData {
        /// Configured entry count
        entries: usize,
        /// Required length in bytes
        expected: u64,
        /// Actual length in bytes
        actual: u64,
    },

    /// File could not be opened, read, written or renamed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File the operation failed on
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the source failed part way through a pass
    #[error("Read failed at source byte offset {offset}: {source}")]
    Read {
        /// Source offset of the record or region being read
        offset: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the converted book failed
    #[error("Write failed at destination byte offset {offset}: {source}")]
    Write {
        /// Number of bytes the destination accepted before the failure
        offset: u64,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A read or write failure on a named file
    #[error("{}: {source}", path.display())]
    File {
        /// File the failure happened on
        path: PathBuf,
        /// The read or write failure
        #[source]
        source: Box<BookError>,
    },

    /// Binary read/write error
    #[error("Binary parsing error: {0}")]
    BinRead(String),
}

impl BookError {
    /// Whether the error describes a malformed book rather than an I/O failure
    pub fn is_format_error(&self) -> bool {
        match self {
            Self::File { source, .. } => source.is_format_error(),
            _ => matches!(
                self,
                Self::ZeroEntries
                    | Self::EntryCountOverflow { .. }
                    | Self::TruncatedSource { .. }
                    | Self::TrailingData { .. }
                    | Self::BinRead(_)
            ),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Attach the file a stream failure happened on
    pub(crate) fn in_file(self, path: impl Into<PathBuf>) -> Self {
        Self::File {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

impl From<binrw::Error> for BookError {
    fn from(e: binrw::Error) -> Self {
        Self::BinRead(e.to_string())
    }
}

/// Result type alias for opening book operations
pub type Result<T> = std::result::Result<T, BookError>;
