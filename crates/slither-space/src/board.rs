//! The fixed-size rectangular board.

use crate::boundary::BoundaryMode;
use crate::error::SpaceError;
use slither_core::{Cell, Compass};

/// Wrap a single axis value into `[0, len)`.
fn wrap_axis(val: i32, len: u32) -> i32 {
    let n = len as i32;
    ((val % n) + n) % n
}

/// 1D distance along a single axis, taking the shorter way around in
/// toroidal mode.
fn axis_distance(a: i32, b: i32, len: u32, mode: BoundaryMode) -> u32 {
    let diff = (a - b).unsigned_abs();
    match mode {
        BoundaryMode::Toroidal => diff.min(len - diff),
        BoundaryMode::Bordered => diff,
    }
}

/// A rectangular grid with a boundary mode, immutable for an episode.
///
/// Cells have coordinates `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`; y grows southward. Distance is Manhattan (L1),
/// taking wrap into account in toroidal mode.
///
/// # Examples
///
/// ```
/// use slither_space::{Board, BoundaryMode};
/// use slither_core::Cell;
///
/// let board = Board::new(10, 10, BoundaryMode::Toroidal).unwrap();
/// assert_eq!(board.cell_count(), 100);
/// assert_eq!(board.normalize(Cell::new(-1, 10)), Cell::new(9, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: u32,
    height: u32,
    mode: BoundaryMode,
}

impl Board {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a `width * height` board with the given boundary mode.
    ///
    /// Returns `Err(SpaceError::EmptyBoard)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(width: u32, height: u32, mode: BoundaryMode) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptyBoard);
        }
        if width > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            width,
            height,
            mode,
        })
    }

    /// Board width (number of columns).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Board height (number of rows).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Boundary mode.
    pub fn mode(&self) -> BoundaryMode {
        self.mode
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// The larger of the two dimensions.
    ///
    /// Used as the step cap for sensing rays, which would otherwise
    /// orbit a food-free torus forever.
    pub fn max_extent(&self) -> u32 {
        self.width.max(self.height)
    }

    /// Whether `cell` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width as i32
            && cell.y >= 0
            && cell.y < self.height as i32
    }

    /// Wrap `cell` into range on both axes (torus normalization).
    ///
    /// Mode-independent; callers that must respect the boundary mode
    /// use [`normalize`](Board::normalize) instead.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(wrap_axis(cell.x, self.width), wrap_axis(cell.y, self.height))
    }

    /// Normalize a proposed coordinate under the board's boundary mode.
    ///
    /// Toroidal boards wrap; bordered boards return the coordinate
    /// unchanged so the collision resolver can flag the wall violation.
    pub fn normalize(&self, cell: Cell) -> Cell {
        match self.mode {
            BoundaryMode::Toroidal => self.wrap(cell),
            BoundaryMode::Bordered => cell,
        }
    }

    /// One step from `cell` along a compass heading.
    ///
    /// Returns `None` when the step leaves a bordered board; wraps on a
    /// toroidal one. `cell` itself must be in range.
    pub fn step(&self, cell: Cell, heading: Compass) -> Option<Cell> {
        debug_assert!(self.contains(cell), "step from off-board cell {cell}");
        let (dx, dy) = heading.offset();
        let next = cell.offset(dx, dy);
        match self.mode {
            BoundaryMode::Toroidal => Some(self.wrap(next)),
            BoundaryMode::Bordered => self.contains(next).then_some(next),
        }
    }

    /// Manhattan (L1) distance between two in-range cells, taking the
    /// shorter way around each axis in toroidal mode.
    pub fn manhattan(&self, a: Cell, b: Cell) -> u32 {
        axis_distance(a.x, b.x, self.width, self.mode)
            + axis_distance(a.y, b.y, self.height, self.mode)
    }
}
