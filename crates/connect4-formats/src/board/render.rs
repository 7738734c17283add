//! Terminal rendering of boards

use crate::board::cell::Cell;
use crate::board::grid::Board;
use crate::board::square::{Bitboard, FILES, RANKS, Square};

const ANSI_RESET: &str = "\x1B[0m";
const ANSI_RED: &str = "\x1B[31m";
const ANSI_YELLOW: &str = "\x1B[33m";
const ANSI_HIGHLIGHT: &str = "\x1B[30;41m";

/// How stones are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// `X` red, `O` yellow, `.` empty
    Plain,
    /// `X` in ANSI red or yellow, `.` empty
    #[default]
    Ansi,
}

/// Render `board` top rank first, one line per rank
pub fn render(board: &Board, style: RenderStyle) -> String {
    render_highlighted(board, 0, style)
}

/// Render `board` with the squares in `highlight` drawn on a red background
///
/// Highlighting only shows in [`RenderStyle::Ansi`]; plain output draws
/// highlighted squares as `*`.
pub fn render_highlighted(board: &Board, highlight: Bitboard, style: RenderStyle) -> String {
    let mut out = String::with_capacity((FILES * 8 + 1) * RANKS + 8);

    for rank in (0..RANKS).rev() {
        for file in 0..FILES {
            let Some(square) = Square::new(file, rank) else {
                continue;
            };
            let highlighted = highlight & square.bitboard() != 0;
            push_glyph(&mut out, board.cell(square), highlighted, style);
        }
        out.push('\n');
    }

    if style == RenderStyle::Ansi {
        out.push_str(ANSI_RESET);
        out.push('\n');
    }

    out
}

fn push_glyph(out: &mut String, cell: Cell, highlighted: bool, style: RenderStyle) {
    match style {
        RenderStyle::Plain => out.push(match (highlighted, cell) {
            (true, _) => '*',
            (false, Cell::Red) => 'X',
            (false, Cell::Yellow) => 'O',
            (false, Cell::Empty) => '.',
        }),
        RenderStyle::Ansi if highlighted => {
            out.push_str(ANSI_HIGHLIGHT);
            out.push('X');
            out.push_str(ANSI_RESET);
        }
        RenderStyle::Ansi => {
            let (color, glyph) = match cell {
                Cell::Red => (ANSI_RED, 'X'),
                Cell::Yellow => (ANSI_YELLOW, 'X'),
                Cell::Empty => (ANSI_RESET, '.'),
            };
            out.push_str(color);
            out.push(glyph);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::board::grid::tests::SAMPLE_JSON;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_render() {
        let board = Board::from_json(SAMPLE_JSON).unwrap();

        assert_eq!(
            render(&board, RenderStyle::Plain),
            ".......\n\
             .......\n\
             OXO....\n\
             OXXO...\n\
             XOOOX..\n\
             XOXXOX.\n"
        );
    }

    #[test]
    fn test_ansi_render_colors() {
        let mut board = Board::new();
        board.set(Square::new(0, 0).unwrap(), Cell::Red);
        board.set(Square::new(1, 0).unwrap(), Cell::Yellow);

        let text = render(&board, RenderStyle::Ansi);
        let bottom = text.lines().nth(RANKS - 1).unwrap();

        assert!(bottom.starts_with(&format!("{ANSI_RED}X{ANSI_YELLOW}X{ANSI_RESET}.")));
        assert!(text.ends_with(&format!("{ANSI_RESET}\n")));
    }

    #[test]
    fn test_highlight() {
        let board = Board::new();
        let corner = Square::new(6, 5).unwrap().bitboard();

        let plain = render_highlighted(&board, corner, RenderStyle::Plain);
        assert!(plain.starts_with("......*\n"));

        let ansi = render_highlighted(&board, corner, RenderStyle::Ansi);
        assert!(ansi.contains(ANSI_HIGHLIGHT));
    }
}
