//! Command dispatch.

use crate::config::{BoardCommand, BookArgs, BookCommand, Cli, Command};
use crate::error::ToolError;
use connect4_formats::board::{Board, Notation, RenderStyle, render};
use connect4_formats::opening_book::{convert_file, restore_file};
use std::io::Write;

/// Run the command selected by `cli`, printing any report to `out`.
///
/// # Errors
///
/// Returns `ToolError` if the input cannot be read or is malformed, or the
/// output cannot be written.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), ToolError> {
    match &cli.command {
        Command::Book(BookCommand::ToLe(args)) => {
            log_book_args("to-le", args);
            convert_file(&args.source, &args.destination, args.entries)?;
        }
        Command::Book(BookCommand::ToBe(args)) => {
            log_book_args("to-be", args);
            restore_file(&args.source, &args.destination, args.entries)?;
        }
        Command::Board(BoardCommand::Notation { board }) => {
            let board = Board::load(board)?;
            write!(out, "{}", Notation::of(&board)).map_err(ToolError::Output)?;
        }
        Command::Board(BoardCommand::Show { board, no_color }) => {
            let board = Board::load(board)?;
            let style = if *no_color {
                RenderStyle::Plain
            } else {
                RenderStyle::Ansi
            };
            out.write_all(render(&board, style).as_bytes())
                .map_err(ToolError::Output)?;
        }
    }

    out.flush().map_err(ToolError::Output)
}

fn log_book_args(command: &str, args: &BookArgs) {
    tracing::info!(
        "{command}: {} -> {} ({} entries)",
        args.source.display(),
        args.destination.display(),
        args.entries
    );
}
