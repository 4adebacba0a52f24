//! Simultaneous, order-independent collision resolution.

use std::fmt;

use indexmap::IndexMap;
use slither_core::Cell;
use slither_space::{Board, BoundaryMode};
use smallvec::SmallVec;

use crate::agent::Snake;
use crate::food::FoodPool;

/// Why an agent died this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// The proposed head left a bordered board.
    Wall,
    /// The proposed head landed on an occupied cell (another body, the
    /// agent's own body, or another head claiming the same cell).
    Collision,
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall => write!(f, "wall"),
            Self::Collision => write!(f, "collision"),
        }
    }
}

/// One agent's pending move, as seen by the resolver.
///
/// `head` is the proposed head cell after board normalization: wrapped
/// on a toroidal board, possibly out of range on a bordered one.
#[derive(Debug)]
pub struct MoveProposal<'a> {
    /// The agent's pre-move body.
    pub snake: &'a Snake,
    /// The normalized proposed head.
    pub head: Cell,
}

/// The resolver's judgement of one agent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    /// `Some` if the agent dies this tick.
    pub death: Option<DeathCause>,
    /// Whether the proposed head landed on food. Recorded even for a
    /// colliding agent (the fruit is consumed); never for a wall death.
    pub ate: bool,
}

/// Per-cell claim bookkeeping for one resolution pass.
#[derive(Default)]
struct Claim {
    count: u32,
    // Batch indices of agents whose *head* claims the cell. Body
    // segments tally but never kill their owner.
    heads: SmallVec<[usize; 2]>,
}

/// Resolve a whole tick's batch of proposals at once.
///
/// The pass is atomic over the pre-move state: every agent is judged
/// against the same picture of the board, so the outcome is invariant
/// under permutation of the batch. The rules, in order:
///
/// 1. On a bordered board, an out-of-range head is a wall death. The
///    agent's body still tallies as an obstacle for everyone else this
///    tick, with its tail vacated as on any other move, but its head
///    claims nothing and it cannot eat.
/// 2. Every surviving proposal tallies its resulting occupancy: the
///    current body, minus the tail cell if this move vacates it, plus
///    the proposed head. A cell claimed more than once kills every
///    agent whose head claims it. Two heads meeting at one cell
///    therefore kill each other symmetrically, and a head may follow a
///    tail that is moving out of the way.
/// 3. A head on a food cell is an eat event regardless of survival.
///
/// Returns one [`Verdict`] per proposal, in batch order.
pub fn resolve(board: &Board, food: &FoodPool, batch: &[MoveProposal<'_>]) -> Vec<Verdict> {
    let bordered = board.mode() == BoundaryMode::Bordered;

    let mut verdicts: Vec<Verdict> = batch
        .iter()
        .map(|p| {
            let wall = bordered && !board.contains(p.head);
            Verdict {
                death: wall.then_some(DeathCause::Wall),
                ate: !wall && food.contains(p.head),
            }
        })
        .collect();

    let mut claims: IndexMap<Cell, Claim> = IndexMap::new();
    let mut tally = |cell: Cell, head_of: Option<usize>| {
        let claim = claims.entry(cell).or_default();
        claim.count += 1;
        if let Some(index) = head_of {
            claim.heads.push(index);
        }
    };

    for (index, proposal) in batch.iter().enumerate() {
        let wall_dead = verdicts[index].death.is_some();
        let drops_tail = proposal.snake.drops_tail(verdicts[index].ate);
        let tail = proposal.snake.tail();
        for cell in proposal.snake.segments() {
            if drops_tail && cell == tail {
                continue;
            }
            tally(cell, None);
        }
        // A wall-dead head is off the board and claims no cell.
        if !wall_dead {
            tally(proposal.head, Some(index));
        }
    }

    for claim in claims.values() {
        if claim.count > 1 {
            for &index in &claim.heads {
                verdicts[index].death = Some(DeathCause::Collision);
            }
        }
    }

    verdicts
}
