//! Error types for board parsing

use thiserror::Error;

/// Errors that can occur when loading a board
#[derive(Debug, Error)]
pub enum BoardError {
    /// Cell token other than `a`, `b` or `e`
    #[error("Unknown cell token '{0}': expected 'a', 'b' or 'e'")]
    UnknownToken(String),

    /// Wrong number of ranks (rows)
    #[error("Board must have {expected} ranks, got {actual}")]
    RankCount {
        /// Required rank count
        expected: usize,
        /// Ranks found
        actual: usize,
    },

    /// Wrong number of files (columns) in a rank
    #[error("Rank {rank} must have {expected} files, got {actual}")]
    FileCount {
        /// One-based rank number
        rank: usize,
        /// Required file count
        expected: usize,
        /// Files found
        actual: usize,
    },

    /// Both players occupy the same squares
    #[error("Bitboards overlap on squares {0:#x}")]
    OverlappingBitboards(u64),

    /// Bitboard has bits outside the playable squares
    #[error("Bitboard has bits outside the board: {0:#x}")]
    OffBoard(u64),

    /// Board file is not valid JSON
    #[error("Invalid board JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a board
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for board operations
pub type Result<T> = std::result::Result<T, BoardError>;
