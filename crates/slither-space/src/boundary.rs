//! Boundary (edge) behavior for the board.

/// How the board handles coordinates at its edges.
///
/// This controls topology, not rendering: in `Toroidal` mode a proposed
/// head position is wrap-normalized before any collision check, so wall
/// deaths cannot occur. In `Bordered` mode out-of-range coordinates are
/// left as-is and flagged as a wall violation by the collision resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryMode {
    /// Edges wrap to the opposite side (torus topology).
    Toroidal,
    /// Edges are lethal on contact.
    Bordered,
}
