//! Movement and sensing directions.
//!
//! Movement is strictly 4-way ([`Direction`]); the 8-way [`Compass`] is
//! used by sensing rays only, never to advance an agent. [`Steering`] is
//! the relative turn command a policy emits, mapped back to an absolute
//! direction against the agent's current heading.

use std::fmt;

/// A cardinal movement direction.
///
/// The y axis grows southward, so `North` is `(0, -1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward decreasing y.
    North,
    /// Toward increasing x.
    East,
    /// Toward increasing y.
    South,
    /// Toward decreasing x.
    West,
}

impl Direction {
    /// All directions in clockwise order starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The `(dx, dy)` unit step for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    /// The 180-degree reversal of this direction.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Whether `intent` would reverse this direction in place.
    ///
    /// A reversing intent is discarded by the agent: a snake can never
    /// turn 180 degrees in a single tick.
    pub fn is_reversal_of(self, intent: Direction) -> bool {
        intent == self.opposite()
    }

    /// Index into [`Direction::ALL`] (clockwise from north).
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The equivalent 8-way compass heading.
    pub const fn compass(self) -> Compass {
        match self {
            Direction::North => Compass::North,
            Direction::East => Compass::East,
            Direction::South => Compass::South,
            Direction::West => Compass::West,
        }
    }

    /// Apply a relative steering command to this heading.
    pub const fn turn(self, steering: Steering) -> Direction {
        let shift = match steering {
            Steering::Left => 3,
            Steering::Straight => 0,
            Steering::Right => 1,
        };
        Direction::ALL[(self.index() + shift) % 4]
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{name}")
    }
}

/// A relative turn command emitted by a policy.
///
/// Mapped to an absolute [`Direction`] via [`Direction::turn`] before
/// being handed to the movement layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Steering {
    /// Turn 90 degrees counterclockwise.
    Left,
    /// Keep the current heading.
    Straight,
    /// Turn 90 degrees clockwise.
    Right,
}

impl Steering {
    /// All steering commands in policy-output order (left, straight, right).
    pub const ALL: [Steering; 3] = [Steering::Left, Steering::Straight, Steering::Right];
}

/// An 8-way compass heading, used by sensing rays.
///
/// Indexed clockwise from north. Diagonal steps move one cell on both
/// axes. Movement never uses diagonals; only the sensor scan does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    /// `(0, -1)`
    North,
    /// `(1, -1)`
    NorthEast,
    /// `(1, 0)`
    East,
    /// `(1, 1)`
    SouthEast,
    /// `(0, 1)`
    South,
    /// `(-1, 1)`
    SouthWest,
    /// `(-1, 0)`
    West,
    /// `(-1, -1)`
    NorthWest,
}

impl Compass {
    /// All headings in clockwise order starting at north.
    pub const ALL: [Compass; 8] = [
        Compass::North,
        Compass::NorthEast,
        Compass::East,
        Compass::SouthEast,
        Compass::South,
        Compass::SouthWest,
        Compass::West,
        Compass::NorthWest,
    ];

    /// The `(dx, dy)` unit step for this heading.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Compass::North => (0, -1),
            Compass::NorthEast => (1, -1),
            Compass::East => (1, 0),
            Compass::SouthEast => (1, 1),
            Compass::South => (0, 1),
            Compass::SouthWest => (-1, 1),
            Compass::West => (-1, 0),
            Compass::NorthWest => (-1, -1),
        }
    }

    /// Index into [`Compass::ALL`] (clockwise from north).
    pub const fn index(self) -> usize {
        match self {
            Compass::North => 0,
            Compass::NorthEast => 1,
            Compass::East => 2,
            Compass::SouthEast => 3,
            Compass::South => 4,
            Compass::SouthWest => 5,
            Compass::West => 6,
            Compass::NorthWest => 7,
        }
    }

    /// The heading at `index mod 8` in clockwise order.
    pub const fn from_index(index: usize) -> Compass {
        Compass::ALL[index % 8]
    }
}
