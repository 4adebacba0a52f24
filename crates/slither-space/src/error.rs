//! Error types for board construction.

use std::fmt;

/// Errors arising from board construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a board with a zero-sized dimension.
    EmptyBoard,
    /// A dimension exceeds the coordinate range (`i32::MAX`).
    DimensionTooLarge {
        /// Axis name ("width" or "height").
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
