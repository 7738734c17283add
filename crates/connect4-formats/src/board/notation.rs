//! Square-list notation for seeding engine positions

use crate::board::cell::Cell;
use crate::board::grid::Board;
use crate::board::square::Square;
use std::fmt;

/// Separator between squares, matching the engine's bitboard `|` operator
pub const SQUARE_DELIMITER: &str = "|";

/// Occupied squares per player
///
/// Displays as two lines:
///
/// ```text
/// Red : (SQ_A1|SQ_A2|SQ_B3)
/// Yellow : (SQ_A3|SQ_B1)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notation {
    /// Red squares, file-major
    pub red: Vec<Square>,
    /// Yellow squares, file-major
    pub yellow: Vec<Square>,
}

impl Notation {
    /// Collect the occupied squares of `board`
    pub fn of(board: &Board) -> Self {
        Self {
            red: board.squares_of(Cell::Red),
            yellow: board.squares_of(Cell::Yellow),
        }
    }

    /// One player's line, e.g. `Red : (SQ_A1|SQ_C1)`
    pub fn line(&self, player: Cell) -> String {
        let squares: &[Square] = match player {
            Cell::Red => &self.red,
            Cell::Yellow => &self.yellow,
            Cell::Empty => &[],
        };

        format!("{} : ({})", player.player_name(), join(squares))
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.line(Cell::Red))?;
        writeln!(f, "{}", self.line(Cell::Yellow))
    }
}

fn join(squares: &[Square]) -> String {
    squares
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(SQUARE_DELIMITER)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::board::grid::tests::SAMPLE_JSON;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sample_notation() {
        let board = Board::from_json(SAMPLE_JSON).unwrap();

        assert_eq!(
            Notation::of(&board).to_string(),
            "Red : (SQ_A1|SQ_A2|SQ_B3|SQ_B4|SQ_C1|SQ_C3|SQ_D1|SQ_E2|SQ_F1)\n\
             Yellow : (SQ_A3|SQ_A4|SQ_B1|SQ_B2|SQ_C2|SQ_C4|SQ_D2|SQ_D3|SQ_E1)\n"
        );
    }

    #[test]
    fn test_single_red_corner() {
        let mut board = Board::new();
        board.set(Square::new(0, 0).unwrap(), Cell::Red);

        let text = Notation::of(&board).to_string();
        assert!(text.starts_with("Red : (SQ_A1"));
        assert!(text.contains("Yellow : ()"));
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(
            Notation::of(&Board::new()).to_string(),
            "Red : ()\nYellow : ()\n"
        );
    }
}
