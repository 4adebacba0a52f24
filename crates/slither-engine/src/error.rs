//! Engine error types.

use std::fmt;

use slither_core::Cell;
use slither_space::SpaceError;

/// Errors detected while validating an episode configuration.
///
/// Validation is all-or-nothing: a bad configuration never produces a
/// partial episode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The agent list is empty.
    NoAgents,
    /// The board dimensions are invalid.
    Board(SpaceError),
    /// An agent's starting cell lies off the board.
    StartOutOfBounds {
        /// Index of the offending agent spec.
        index: usize,
        /// The configured starting cell.
        cell: Cell,
    },
    /// Two agents share a starting cell.
    StartOverlap {
        /// Index of the later of the two overlapping specs.
        index: usize,
        /// The contested cell.
        cell: Cell,
    },
    /// A configured initial food cell lies off the board.
    FoodOutOfBounds {
        /// The configured food cell.
        cell: Cell,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAgents => write!(f, "episode requires at least one agent"),
            Self::Board(err) => write!(f, "invalid board: {err}"),
            Self::StartOutOfBounds { index, cell } => {
                write!(f, "agent {index} starts off-board at {cell}")
            }
            Self::StartOverlap { index, cell } => {
                write!(f, "agent {index} starts on an already claimed cell {cell}")
            }
            Self::FoodOutOfBounds { cell } => {
                write!(f, "initial food cell {cell} is off-board")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(err: SpaceError) -> Self {
        Self::Board(err)
    }
}
