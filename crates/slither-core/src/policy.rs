//! The policy and tile-probe traits.
//!
//! These two traits are the decoupling seams of the workspace: the
//! engine drives internally-controlled agents through [`Policy`] without
//! knowing anything about the decision process, and observation
//! extraction reads board occupancy through [`TileProbe`] without
//! referencing the engine's data structures.

use crate::cell::Cell;
use crate::direction::Steering;
use crate::sensor::SensorView;

/// A decision capability attached to an internally-driven agent.
///
/// Called once per tick with the agent's rotated sensor view; returns a
/// steering command relative to the current heading. The engine maps it
/// back to an absolute direction before movement, so a policy never
/// deals in absolute coordinates.
///
/// `Send` so that episodes (which own boxed policies) can be moved
/// between threads by an outer multi-episode optimizer.
pub trait Policy: Send {
    /// Choose a steering command for the current tick.
    fn decide(&mut self, senses: &SensorView) -> Steering;
}

/// Read-only occupancy queries against a board snapshot.
///
/// Implemented by the engine; consumed by sensor extraction. Both
/// methods accept any cell — callers may probe out-of-range coordinates
/// and expect `false` rather than a panic.
pub trait TileProbe {
    /// Whether `cell` is occupied by any agent body segment.
    fn blocked(&self, cell: Cell) -> bool;

    /// Whether `cell` currently holds food.
    fn fruit(&self, cell: Cell) -> bool;
}
