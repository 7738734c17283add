//! Connect Four boards
//!
//! Boards are 7 files (`A` to `G`, left to right) by 6 ranks (`1` to `6`,
//! bottom to top). A square is named `SQ_<file><rank>`, the same names the
//! engine uses for its square constants, so the notation output can be pasted
//! straight into a bitboard expression such as `SQ_A1|SQ_B2`.
//!
//! # Usage
//!
//! ```rust
//! use connect4_formats::board::{Board, Notation};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let board = Board::from_json(r#"[
//!     ["a", "b", "e", "e", "e", "e", "e"],
//!     ["a", "e", "e", "e", "e", "e", "e"],
//!     ["e", "e", "e", "e", "e", "e", "e"],
//!     ["e", "e", "e", "e", "e", "e", "e"],
//!     ["e", "e", "e", "e", "e", "e", "e"],
//!     ["e", "e", "e", "e", "e", "e", "e"]
//! ]"#)?;
//!
//! assert_eq!(
//!     Notation::of(&board).to_string(),
//!     "Red : (SQ_A1|SQ_A2)\nYellow : (SQ_B1)\n"
//! );
//! # Ok(())
//! # }
//! ```

pub mod cell;
pub mod error;
pub mod grid;
pub mod notation;
pub mod render;
pub mod square;

pub use cell::Cell;
pub use error::{BoardError, Result};
pub use grid::Board;
pub use notation::Notation;
pub use render::{RenderStyle, render, render_highlighted};
pub use square::{ALL_SQUARES, Bitboard, FILES, RANKS, Square, squares};
