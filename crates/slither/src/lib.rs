//! Slither: a multi-agent snake simulation engine.
//!
//! This is the top-level facade crate re-exporting the public API from
//! all Slither sub-crates. For most users, adding `slither` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use slither::prelude::*;
//!
//! // Two externally-driven snakes on a 20x20 torus.
//! let mut config = EpisodeConfig::new(20, 20, BoundaryMode::Toroidal);
//! config.seed = Some(42);
//! config.max_food = 2;
//! config.step_budget = Some(100);
//! config.agents.push(AgentSpec::external(Cell::new(5, 10), Direction::East));
//! config.agents.push(AgentSpec::external(Cell::new(15, 10), Direction::West));
//!
//! let mut episode = Episode::new(config).unwrap();
//! let result = episode.tick(&[(AgentId(0), Direction::North)]);
//! assert_eq!(result.tick, TickId(1));
//! assert_eq!(result.metrics.live_agents, 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slither-core` | IDs, cells, directions, the `Policy` and `TileProbe` traits |
//! | [`space`] | `slither-space` | The board, boundary modes, wrap-aware distance |
//! | [`obs`] | `slither-obs` | Sensor view extraction |
//! | [`engine`] | `slither-engine` | Snakes, food, collision resolution, episodes |
//! | [`policy`] | `slither-policy` | The reference feed-forward network policy |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`slither-core`).
///
/// IDs, [`types::Cell`], the direction types, the sensor view, and the
/// [`types::Policy`] / [`types::TileProbe`] traits.
pub use slither_core as types;

/// Board topology (`slither-space`).
///
/// [`space::Board`] with toroidal or bordered edges and wrap-aware
/// Manhattan distance.
pub use slither_space as space;

/// Sensor view extraction (`slither-obs`).
///
/// [`obs::sense`] turns board occupancy into the rotated 16-element
/// view a policy observes.
pub use slither_obs as obs;

/// The tick engine (`slither-engine`).
///
/// [`engine::Episode`] owns the simulation; [`engine::resolve`] is the
/// simultaneous collision resolver underneath it.
pub use slither_engine as engine;

/// Reference policy (`slither-policy`).
///
/// [`policy::NeuroPolicy`], a flat-parameter feed-forward network for
/// evolutionary optimizers.
pub use slither_policy as policy;

/// Common imports for typical Slither usage.
///
/// ```rust
/// use slither::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use slither_core::{
        AgentId, Cell, Compass, Direction, Policy, SensorView, Steering, TickId, TileProbe,
    };

    // Errors
    pub use slither_core::PolicyError;
    pub use slither_engine::ConfigError;
    pub use slither_space::SpaceError;

    // Space
    pub use slither_space::{Board, BoundaryMode};

    // Engine
    pub use slither_engine::{
        AgentSpec, BoardSnapshot, DeathCause, Driver, Episode, EpisodeConfig, EpisodeState,
        EpisodeSummary, RewardTable, TickMetrics, TickResult,
    };

    // Reference policy
    pub use slither_policy::NeuroPolicy;
}
