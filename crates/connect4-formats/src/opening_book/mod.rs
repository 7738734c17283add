//! Opening book file layouts
//!
//! The book generator writes fixed 5-byte records: a 4-byte position key in
//! big-endian order followed by a 1-byte value. The engine loads its keys and
//! values into separate tables, so it expects the book re-bucketed: every key
//! byte-reversed to little-endian, in record order, followed by every value in
//! record order.
//!
//! # Format Overview
//!
//! - No header, footer or padding
//! - Entry count is configuration, never derived from the file
//! - Both layouts are exactly `5 * entries` bytes long
//! - Conversion is a permutation of byte positions
//!
//! # Usage
//!
//! ```rust
//! use connect4_formats::opening_book::{BookLayout, OpeningBook, convert_bytes, restore_bytes};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let source = [0x01, 0x02, 0x03, 0x04, 0xAA, 0x05, 0x06, 0x07, 0x08, 0xBB];
//!
//! let converted = convert_bytes(&source, 2)?;
//! assert_eq!(converted, [0x04, 0x03, 0x02, 0x01, 0x08, 0x07, 0x06, 0x05, 0xAA, 0xBB]);
//!
//! let book = OpeningBook::parse(&converted, BookLayout::Bucketed, 2)?;
//! assert_eq!(book.lookup(0x0506_0708), Some(0xBB));
//!
//! assert_eq!(restore_bytes(&converted, 2)?, source);
//! # Ok(())
//! # }
//! ```

pub mod book;
pub mod convert;
pub mod error;
pub mod file;
pub mod layout;
pub mod record;

// Re-export main types
pub use book::OpeningBook;
pub use convert::{convert_bytes, convert_stream, restore_bytes, restore_stream};
pub use error::{BookError, Result};
pub use file::{convert_file, restore_file};
pub use layout::{
    BookLayout, DEFAULT_NUM_ENTRIES, KEY_SIZE, RECORD_SIZE, VALUE_SIZE, check_len, expected_len,
};
pub use record::BookRecord;
