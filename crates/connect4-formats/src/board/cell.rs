//! Cell contents

use crate::board::error::BoardError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contents of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Cell {
    /// First player's stone (token `a`)
    Red,
    /// Second player's stone (token `b`)
    Yellow,
    /// No stone (token `e`)
    #[default]
    Empty,
}

impl Cell {
    /// Token used in board files
    pub const fn token(self) -> &'static str {
        match self {
            Self::Red => "a",
            Self::Yellow => "b",
            Self::Empty => "e",
        }
    }

    /// Parse a board file token
    pub fn from_token(token: &str) -> Result<Self, BoardError> {
        match token {
            "a" => Ok(Self::Red),
            "b" => Ok(Self::Yellow),
            "e" => Ok(Self::Empty),
            other => Err(BoardError::UnknownToken(other.to_string())),
        }
    }

    /// Player name used in notation output
    pub const fn player_name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Empty => "Empty",
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_token(&value)
    }
}

impl From<Cell> for &'static str {
    fn from(cell: Cell) -> Self {
        cell.token()
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
