//! Byte layouts and board notation for Connect Four tooling
//!
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::cast_lossless)] // Sometimes clearer than From
#![allow(clippy::uninlined_format_args)] // Backwards compatibility
//! This crate provides the two data transformations used around the Connect
//! Four engine:
//!
//! - **Opening book**: the fixed-record `key + value` file produced by the
//!   book generator, in both its interleaved big-endian form and the bucketed
//!   little-endian form the engine loads (all keys, then all values).
//! - **Board**: a 6x7 grid of cell tokens, converted to square notation,
//!   engine bitboards, or a terminal rendering.
//!
//! # Design Principles
//!
//! - **Symmetric Operations**: every layout can be parsed and built, and every
//!   conversion has an inverse
//! - **Validate First**: file lengths are checked against the configured
//!   entry count before a single byte is written
//! - **Explicit Configuration**: entry counts and boards are parameters, never
//!   process-wide state

#![warn(missing_docs)]

/// Board grids, square notation, bitboards and rendering
///
/// A board is read from a JSON grid of `"a"` (red), `"b"` (yellow) and `"e"`
/// (empty) tokens, bottom rank first, and can be turned into the
/// `SQ_<file><rank>` lists used to seed engine positions.
///
/// See the [`board`] module for the grid format and notation rules.
pub mod board;
/// Opening book record layouts and the endian converter
///
/// This module provides the record model for the opening book file and the
/// conversion between its two on-disk layouts:
///
/// - **Interleaved**: `N` records of `key (4 bytes, big-endian) + value (1 byte)`
/// - **Bucketed**: `N` byte-reversed keys followed by `N` values
///
/// Conversions are available in memory, as two-pass streams over any
/// `Read + Seek` source, and as atomic file-to-file operations.
///
/// See the [`opening_book`] module for layout diagrams and usage examples.
pub mod opening_book;
