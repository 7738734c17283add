//! On-disk layouts of the opening book

use crate::opening_book::error::{BookError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Size of a key field in bytes
pub const KEY_SIZE: usize = 4;

/// Size of a value field in bytes
pub const VALUE_SIZE: usize = 1;

/// Size of one interleaved record in bytes
pub const RECORD_SIZE: usize = KEY_SIZE + VALUE_SIZE;

/// Entry count of the book shipped with the engine
pub const DEFAULT_NUM_ENTRIES: usize = 4_200_899;

/// Arrangement of records within an opening book file
///
/// ```text
/// Interleaved (generator output, big-endian keys):
///   K0 K0 K0 K0 V0 | K1 K1 K1 K1 V1 | ...
///
/// Bucketed (engine input, little-endian keys):
///   K0 K0 K0 K0 | K1 K1 K1 K1 | ... | V0 | V1 | ...
/// ```
///
/// Both layouts hold exactly `RECORD_SIZE * entries` bytes with no header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookLayout {
    /// Per-record `key + value`, keys big-endian
    Interleaved,
    /// All keys (little-endian) followed by all values
    Bucketed,
}

impl BookLayout {
    /// Byte offset of the key of record `index`
    pub const fn key_offset(self, index: usize) -> usize {
        match self {
            Self::Interleaved => index * RECORD_SIZE,
            Self::Bucketed => index * KEY_SIZE,
        }
    }

    /// Byte offset of the value of record `index` in a book of `entries` records
    pub const fn value_offset(self, index: usize, entries: usize) -> usize {
        match self {
            Self::Interleaved => index * RECORD_SIZE + KEY_SIZE,
            Self::Bucketed => entries * KEY_SIZE + index,
        }
    }

    /// The layout this one converts to
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Interleaved => Self::Bucketed,
            Self::Bucketed => Self::Interleaved,
        }
    }
}

impl fmt::Display for BookLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interleaved => f.write_str("interleaved big-endian"),
            Self::Bucketed => f.write_str("bucketed little-endian"),
        }
    }
}

/// Total file length for a book of `entries` records
pub fn expected_len(entries: usize) -> Result<u64> {
    if entries == 0 {
        return Err(BookError::ZeroEntries);
    }

    (entries as u64)
        .checked_mul(RECORD_SIZE as u64)
        .ok_or(BookError::EntryCountOverflow { entries })
}

/// Check that `actual` bytes hold exactly `entries` records
pub fn check_len(actual: u64, entries: usize) -> Result<()> {
    let expected = expected_len(entries)?;

    match actual.cmp(&expected) {
        Ordering::Equal => Ok(()),
        Ordering::Less => Err(BookError::TruncatedSource {
            entries,
            expected,
            actual,
        }),
        Ordering::Greater => Err(BookError::TrailingData {
            entries,
            expected,
            actual,
        }),
    }
}
