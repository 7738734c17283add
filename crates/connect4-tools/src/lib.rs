//! Connect Four command-line tools.
//!
//! This crate wraps the `connect4-formats` library in a small CLI:
//! - `book to-le`: interleaved big-endian opening book to the bucketed
//!   little-endian layout the engine loads
//! - `book to-be`: the inverse conversion
//! - `board notation`: per-player `SQ_` square lists for a board file
//! - `board show`: terminal drawing of a board file
//!
//! # Architecture
//!
//! - `config`: argument parsing and validation
//! - `commands`: command dispatch
//! - `error`: error types
//!
//! # Example
//!
//! ```no_run
//! use connect4_tools::{Cli, run};
//!
//! fn main() -> anyhow::Result<()> {
//!     let cli = Cli::from_args();
//!     tracing_subscriber::fmt().with_env_filter(cli.env_filter()?).init();
//!
//!     cli.validate()?;
//!     run(&cli, &mut std::io::stdout().lock())?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

// Module declarations
pub mod commands;
pub mod config;
pub mod error;

// Re-exports for public API
pub use commands::run;
pub use config::{BoardCommand, BookArgs, BookCommand, Cli, Command};
pub use error::{ConfigError, ToolError};
