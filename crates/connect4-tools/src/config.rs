//! Command-line configuration.
//!
//! Arguments are parsed with clap; the entry count and log level can also be
//! supplied through the environment:
//!
//! - `CONNECT4_BOOK_ENTRIES`: number of records in the opening book
//! - `CONNECT4_LOG`: tracing filter directive (overridden by `RUST_LOG`)
//!
//! # Example
//!
//! ```no_run
//! use connect4_tools::Cli;
//!
//! let cli = Cli::from_args();
//! cli.validate().expect("Invalid configuration");
//! ```

use crate::error::ConfigError;
use clap::{Args, Parser, Subcommand};
use connect4_formats::opening_book::DEFAULT_NUM_ENTRIES;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Top-level command line.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "connect4-tools",
    about = "Opening book and board utilities for the Connect Four engine",
    version
)]
pub struct Cli {
    /// Log filter directive (e.g. `info`, `connect4_formats=debug`)
    #[arg(long, global = true, env = "CONNECT4_LOG", default_value = "info")]
    pub log_level: String,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Tool commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert opening book files between layouts
    #[command(subcommand)]
    Book(BookCommand),

    /// Inspect board files
    #[command(subcommand)]
    Board(BoardCommand),
}

/// Opening book commands.
#[derive(Debug, Clone, Subcommand)]
pub enum BookCommand {
    /// Interleaved big-endian book to bucketed little-endian book
    ToLe(BookArgs),

    /// Bucketed little-endian book back to interleaved big-endian book
    ToBe(BookArgs),
}

/// Arguments shared by the book commands.
#[derive(Debug, Clone, Args)]
pub struct BookArgs {
    /// Book to read
    pub source: PathBuf,

    /// Book to write (replaced atomically)
    pub destination: PathBuf,

    /// Number of records in the book
    #[arg(
        long,
        short = 'n',
        env = "CONNECT4_BOOK_ENTRIES",
        default_value_t = DEFAULT_NUM_ENTRIES,
        value_parser = parse_entries
    )]
    pub entries: usize,
}

/// Board commands.
#[derive(Debug, Clone, Subcommand)]
pub enum BoardCommand {
    /// Print the occupied squares of each player
    Notation {
        /// Board JSON file (ranks bottom first, tokens "a", "b", "e")
        board: PathBuf,
    },

    /// Draw the board
    Show {
        /// Board JSON file (ranks bottom first, tokens "a", "b", "e")
        board: PathBuf,

        /// Draw without ANSI colors
        #[arg(long)]
        no_color: bool,
    },
}

impl Cli {
    /// Parse configuration from command-line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Log filter to install, preferring `RUST_LOG` when it is set.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_from_default_env().or_else(|_| {
            EnvFilter::try_new(&self.log_level).map_err(|e| ConfigError::InvalidLogLevel {
                directive: self.log_level.clone(),
                reason: e.to_string(),
            })
        })
    }

    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - An input file doesn't exist
    /// - A book command would overwrite its own source
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.command {
            Command::Book(BookCommand::ToLe(args) | BookCommand::ToBe(args)) => {
                require_file(&args.source)?;
                if same_file(&args.source, &args.destination) {
                    return Err(ConfigError::SameSourceAndDestination(
                        args.destination.clone(),
                    ));
                }
            }
            Command::Board(BoardCommand::Notation { board } | BoardCommand::Show { board, .. }) => {
                require_file(board)?;
            }
        }

        Ok(())
    }
}

fn parse_entries(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("entry count must be positive".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn require_file(path: &Path) -> Result<(), ConfigError> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConfigError::MissingInput(path.to_path_buf()))
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
