//! The Slither tick engine.
//!
//! Owns all mutable simulation state: snake bodies, the food pool, the
//! collision resolver, and the [`Episode`] state machine that ties them
//! together. One call to [`Episode::tick`] advances every agent one
//! cell, resolves the whole batch of moves simultaneously, replenishes
//! food, and reports per-agent rewards.
//!
//! The engine is single-threaded and caller-driven. Parallelism, where
//! wanted, lives across independent episodes, each owning its own RNG.
//!
//! # Examples
//!
//! ```
//! use slither_engine::{AgentSpec, Episode, EpisodeConfig, EpisodeState};
//! use slither_core::{Cell, Direction};
//! use slither_space::BoundaryMode;
//!
//! let mut config = EpisodeConfig::new(20, 20, BoundaryMode::Toroidal);
//! config.seed = Some(1);
//! config.step_budget = Some(100);
//! config.agents.push(AgentSpec::external(Cell::new(10, 10), Direction::East));
//!
//! let mut episode = Episode::new(config)?;
//! let result = episode.tick(&[]);
//! assert_eq!(result.state, EpisodeState::Running);
//! # Ok::<(), slither_engine::ConfigError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod episode;
pub mod error;
pub mod food;
pub mod metrics;
pub mod resolver;

pub use agent::{Snake, GROWTH_INCREMENT, INITIAL_TARGET_LENGTH};
pub use config::{AgentSpec, Driver, EpisodeConfig, RewardTable};
pub use episode::{BoardSnapshot, Episode, EpisodeState, EpisodeSummary, TickResult};
pub use error::ConfigError;
pub use food::{FoodPool, SPAWN_ATTEMPT_BUDGET};
pub use metrics::TickMetrics;
pub use resolver::{resolve, DeathCause, MoveProposal, Verdict};
