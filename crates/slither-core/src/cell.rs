//! Grid cell coordinates.

use std::fmt;

/// A coordinate on the simulation grid.
///
/// Components are signed so that a proposed head position can lie
/// outside the board before wrap normalization or the wall check runs.
/// The y axis grows southward (screen convention): moving north
/// decrements `y`.
///
/// # Examples
///
/// ```
/// use slither_core::Cell;
///
/// let c = Cell::new(3, 7);
/// assert_eq!(c.offset(1, -1), Cell::new(4, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column, increasing eastward.
    pub x: i32,
    /// Row, increasing southward.
    pub y: i32,
}

impl Cell {
    /// Construct a cell at `(x, y)`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell displaced by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
