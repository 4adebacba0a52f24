//! Error types shared across policy implementations.

use std::error::Error;
use std::fmt;

/// Errors from constructing a policy out of external data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PolicyError {
    /// The supplied parameter vector has the wrong length.
    ParamLength {
        /// The length the policy shape requires.
        expected: usize,
        /// The length that was supplied.
        got: usize,
    },
    /// A structural parameter (e.g. hidden layer width) is zero.
    EmptyLayer {
        /// Name of the offending layer parameter.
        name: &'static str,
    },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParamLength { expected, got } => {
                write!(f, "parameter vector length {got}, expected {expected}")
            }
            Self::EmptyLayer { name } => write!(f, "layer '{name}' must be non-empty"),
        }
    }
}

impl Error for PolicyError {}
