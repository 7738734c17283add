//! Board grid

use crate::board::cell::Cell;
use crate::board::error::{BoardError, Result};
use crate::board::square::{ALL_SQUARES, Bitboard, FILES, RANKS, Square, squares};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// A 6x7 Connect Four position
///
/// `cells[rank][file]`, rank 0 is the bottom row and file 0 is file `A`.
/// Board files list the ranks bottom first, each as an array of seven tokens:
///
/// ```json
/// [
///   ["a", "b", "a", "a", "b", "a", "e"],
///   ["e", "e", "e", "e", "e", "e", "e"],
///   ...
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; FILES]; RANKS],
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from ranks listed bottom first
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.len() != RANKS {
            return Err(BoardError::RankCount {
                expected: RANKS,
                actual: rows.len(),
            });
        }

        let mut board = Self::new();
        for (rank, row) in rows.into_iter().enumerate() {
            board.cells[rank] = row.try_into().map_err(|row: Vec<Cell>| BoardError::FileCount {
                rank: rank + 1,
                expected: FILES,
                actual: row.len(),
            })?;
        }

        Ok(board)
    }

    /// Build a board from token ranks listed bottom first
    ///
    /// Tokens are checked before the dimensions, so a bad token is reported
    /// as [`BoardError::UnknownToken`].
    pub fn from_tokens(rows: &[Vec<String>]) -> Result<Self> {
        let rows = rows
            .iter()
            .map(|row| row.iter().map(|token| Cell::from_token(token)).collect())
            .collect::<Result<Vec<Vec<Cell>>>>()?;

        Self::from_rows(rows)
    }

    /// Parse a board from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_tokens(&serde_json::from_str::<Vec<Vec<String>>>(json)?)
    }

    /// Parse a board from a JSON reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_tokens(&serde_json::from_reader::<_, Vec<Vec<String>>>(reader)?)
    }

    /// Load a board from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    /// Build a board from red and yellow bitboards
    pub fn from_bitboards(red: Bitboard, yellow: Bitboard) -> Result<Self> {
        let overlap = red & yellow;
        if overlap != 0 {
            return Err(BoardError::OverlappingBitboards(overlap));
        }
        let off_board = (red | yellow) & !ALL_SQUARES;
        if off_board != 0 {
            return Err(BoardError::OffBoard(off_board));
        }

        let mut board = Self::new();
        for square in squares(red) {
            board.set(square, Cell::Red);
        }
        for square in squares(yellow) {
            board.set(square, Cell::Yellow);
        }

        Ok(board)
    }

    /// Cell at `square`
    pub fn cell(&self, square: Square) -> Cell {
        self.cells[square.rank()][square.file()]
    }

    /// Place `cell` at `square`
    pub fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.rank()][square.file()] = cell;
    }

    /// Squares holding `cell`, files `A..G` outer and ranks `1..6` inner
    pub fn squares_of(&self, cell: Cell) -> Vec<Square> {
        Square::all().filter(|&sq| self.cell(sq) == cell).collect()
    }

    /// Red and yellow bitboards
    pub fn bitboards(&self) -> (Bitboard, Bitboard) {
        Square::all().fold((0, 0), |(red, yellow), sq| match self.cell(sq) {
            Cell::Red => (red | sq.bitboard(), yellow),
            Cell::Yellow => (red, yellow | sq.bitboard()),
            Cell::Empty => (red, yellow),
        })
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<Cell>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(serde::de::Error::custom)
    }
}
