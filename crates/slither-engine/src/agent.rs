//! Snake bodies and their movement proposals.

use std::collections::VecDeque;

use slither_core::{Cell, Direction};

/// How much a snake's target length grows per fruit eaten.
pub const GROWTH_INCREMENT: usize = 1;

/// Target length every snake starts an episode with.
pub const INITIAL_TARGET_LENGTH: usize = 2;

/// One snake: an ordered body, a heading, and a growth target.
///
/// The body is stored oldest segment first, head at the back. It starts
/// as a single cell and grows toward `target_length` as the snake moves;
/// eating raises the target. After every committed move
/// `body.len() <= target_length` holds.
///
/// Movement is a two-phase protocol so that all agents in a tick can be
/// resolved against the same pre-move state: [`propose_move`] computes
/// the candidate head without mutating, the collision resolver judges
/// the whole batch, and only survivors [`commit`].
///
/// [`propose_move`]: Snake::propose_move
/// [`commit`]: Snake::commit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    target_length: usize,
}

impl Snake {
    /// A new single-cell snake at `start`, heading `direction`.
    pub fn new(start: Cell, direction: Direction) -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_TARGET_LENGTH + 1);
        body.push_back(start);
        Self {
            body,
            direction,
            target_length: INITIAL_TARGET_LENGTH,
        }
    }

    /// The head cell.
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which no public sequence of calls
    /// can produce.
    pub fn head(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    /// The tail (oldest) cell.
    ///
    /// # Panics
    ///
    /// Panics if the body is empty, which no public sequence of calls
    /// can produce.
    pub fn tail(&self) -> Cell {
        *self.body.front().expect("snake body is never empty")
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of body segments currently on the board. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// The length the body is growing toward.
    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Body cells, oldest first, head last.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }

    /// Whether any body segment occupies `cell`.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// The effective direction and raw candidate head for this tick.
    ///
    /// A reversing intent (the exact opposite of the current heading) is
    /// discarded and the snake continues straight; so is an absent one.
    /// The returned cell is the unnormalized head plus one unit step;
    /// wrap handling belongs to the board.
    pub fn propose_move(&self, intent: Option<Direction>) -> (Direction, Cell) {
        let direction = match intent {
            Some(d) if !self.direction.is_reversal_of(d) => d,
            _ => self.direction,
        };
        let (dx, dy) = direction.offset();
        (direction, self.head().offset(dx, dy))
    }

    /// Whether committing this tick's move vacates the tail cell.
    ///
    /// The resolver uses this for the self-tail exemption: a head may
    /// move onto a tail cell that is leaving the board this tick.
    pub fn drops_tail(&self, grew: bool) -> bool {
        let target = self.target_length + if grew { GROWTH_INCREMENT } else { 0 };
        self.body.len() + 1 > target
    }

    /// Apply a resolved move: push the new head, grow if fed, trim to
    /// the target length.
    pub fn commit(&mut self, new_head: Cell, direction: Direction, grew: bool) {
        self.direction = direction;
        if grew {
            self.target_length += GROWTH_INCREMENT;
        }
        self.body.push_back(new_head);
        while self.body.len() > self.target_length {
            self.body.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snake_at(x: i32, y: i32, d: Direction) -> Snake {
        Snake::new(Cell::new(x, y), d)
    }

    // ── Proposal tests ──────────────────────────────────────────

    #[test]
    fn absent_intent_continues_straight() {
        let s = snake_at(5, 5, Direction::East);
        let (d, head) = s.propose_move(None);
        assert_eq!(d, Direction::East);
        assert_eq!(head, Cell::new(6, 5));
    }

    #[test]
    fn reversal_intent_is_discarded() {
        let s = snake_at(5, 5, Direction::East);
        let (d, head) = s.propose_move(Some(Direction::West));
        assert_eq!(d, Direction::East);
        assert_eq!(head, Cell::new(6, 5));
    }

    #[test]
    fn perpendicular_intent_turns() {
        let s = snake_at(5, 5, Direction::East);
        let (d, head) = s.propose_move(Some(Direction::North));
        assert_eq!(d, Direction::North);
        assert_eq!(head, Cell::new(5, 4));
    }

    #[test]
    fn propose_does_not_mutate() {
        let s = snake_at(5, 5, Direction::East);
        let before = s.clone();
        let _ = s.propose_move(Some(Direction::South));
        assert_eq!(s, before);
    }

    // ── Growth tests ────────────────────────────────────────────

    #[test]
    fn new_snake_is_one_cell_targeting_two() {
        let s = snake_at(3, 3, Direction::North);
        assert_eq!(s.len(), 1);
        assert_eq!(s.target_length(), INITIAL_TARGET_LENGTH);
        assert_eq!(s.head(), s.tail());
    }

    #[test]
    fn moving_without_food_grows_to_target_then_slides() {
        let mut s = snake_at(0, 0, Direction::East);
        s.commit(Cell::new(1, 0), Direction::East, false);
        assert_eq!(s.len(), 2);

        s.commit(Cell::new(2, 0), Direction::East, false);
        assert_eq!(s.len(), 2);
        assert_eq!(s.head(), Cell::new(2, 0));
        assert_eq!(s.tail(), Cell::new(1, 0));
    }

    #[test]
    fn eating_raises_the_target() {
        let mut s = snake_at(0, 0, Direction::East);
        s.commit(Cell::new(1, 0), Direction::East, true);
        assert_eq!(s.target_length(), INITIAL_TARGET_LENGTH + 1);
        s.commit(Cell::new(2, 0), Direction::East, false);
        s.commit(Cell::new(3, 0), Direction::East, false);
        assert_eq!(s.len(), 3);
    }

    // ── Tail-drop tests ─────────────────────────────────────────

    #[test]
    fn short_snake_keeps_its_tail() {
        let s = snake_at(0, 0, Direction::East);
        assert!(!s.drops_tail(false));
        assert!(!s.drops_tail(true));
    }

    #[test]
    fn full_length_snake_drops_tail_unless_fed() {
        let mut s = snake_at(0, 0, Direction::East);
        s.commit(Cell::new(1, 0), Direction::East, false);
        assert!(s.drops_tail(false));
        assert!(!s.drops_tail(true));
    }

    #[test]
    fn drops_tail_agrees_with_commit() {
        for grew in [false, true] {
            let mut s = snake_at(0, 0, Direction::East);
            s.commit(Cell::new(1, 0), Direction::East, false);
            let tail = s.tail();
            let predicted = s.drops_tail(grew);
            s.commit(Cell::new(2, 0), Direction::East, grew);
            assert_eq!(predicted, !s.occupies(tail));
        }
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn length_never_exceeds_target(moves in proptest::collection::vec(any::<bool>(), 0..40)) {
            let mut s = snake_at(0, 0, Direction::East);
            for (i, grew) in moves.into_iter().enumerate() {
                s.commit(Cell::new(i as i32 + 1, 0), Direction::East, grew);
                prop_assert!(s.len() <= s.target_length());
            }
        }
    }
}
