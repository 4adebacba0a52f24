//! The food pool.

use indexmap::IndexSet;
use rand::Rng;
use slither_core::Cell;
use slither_space::Board;

/// Maximum uniform draws `replenish` makes in one tick.
///
/// On a crowded board the pool may come up short; the shortfall carries
/// to the next tick rather than spinning on rejected draws.
pub const SPAWN_ATTEMPT_BUDGET: usize = 64;

/// The set of food cells on the board.
///
/// Backed by an [`IndexSet`] so that iteration order (and therefore
/// distance ties and snapshots) is insertion-deterministic. Food never
/// overlaps a body cell at rest; `replenish` skips occupied cells and
/// the tick loop consumes fruit before spawning.
#[derive(Clone, Debug)]
pub struct FoodPool {
    cells: IndexSet<Cell>,
    max_food: usize,
}

impl FoodPool {
    /// An empty pool that replenishes toward `max_food` cells.
    pub fn new(max_food: usize) -> Self {
        Self {
            cells: IndexSet::with_capacity(max_food),
            max_food,
        }
    }

    /// The replenishment target.
    pub fn max_food(&self) -> usize {
        self.max_food
    }

    /// Number of food cells currently on the board.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the pool holds no food.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` holds food.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Food cells in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }

    /// Remove the food at `cell`. Returns whether anything was there.
    pub fn consume(&mut self, cell: Cell) -> bool {
        self.cells.shift_remove(&cell)
    }

    /// Place food at `cell` directly, bypassing the random draw.
    ///
    /// Used for configured initial layouts and deterministic fixtures.
    /// Returns false if the cell already held food.
    pub fn place(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Top the pool back up toward `max_food` with uniform draws.
    ///
    /// Draws that land on existing food or on a cell where `occupied`
    /// returns true are rejected. At most [`SPAWN_ATTEMPT_BUDGET`] draws
    /// are made per call, so a nearly full board degrades to fewer food
    /// cells instead of looping.
    pub fn replenish<R, F>(&mut self, board: &Board, occupied: F, rng: &mut R)
    where
        R: Rng,
        F: Fn(Cell) -> bool,
    {
        let mut budget = SPAWN_ATTEMPT_BUDGET;
        while self.cells.len() < self.max_food && budget > 0 {
            budget -= 1;
            let cell = Cell::new(
                rng.gen_range(0..board.width()) as i32,
                rng.gen_range(0..board.height()) as i32,
            );
            if self.cells.contains(&cell) || occupied(cell) {
                continue;
            }
            self.cells.insert(cell);
        }
    }

    /// Wrap-aware Manhattan distance from `from` to the closest food.
    ///
    /// `None` when the pool is empty.
    pub fn nearest_distance(&self, board: &Board, from: Cell) -> Option<u32> {
        self.cells
            .iter()
            .map(|&cell| board.manhattan(from, cell))
            .min()
    }
}
