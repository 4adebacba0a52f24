//! Episode configuration and validation.

use std::fmt;

use indexmap::IndexSet;
use slither_core::{Cell, Direction, Policy};
use slither_space::{Board, BoundaryMode};

use crate::error::ConfigError;

/// Per-tick reward constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardTable {
    /// Reward for eating a fruit.
    pub fruit: f64,
    /// Reward for dying, replacing any other reward that tick.
    pub death: f64,
    /// Shaping magnitude applied when the nearest-food distance
    /// strictly changes between ticks (positive for closing in).
    pub distance: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            fruit: 10.0,
            death: -50.0,
            distance: 0.4,
        }
    }
}

/// How an agent's per-tick intent is produced.
pub enum Driver {
    /// Intents arrive from outside through `Episode::tick`; absent or
    /// invalid intents mean "continue straight".
    External,
    /// The engine queries this policy with the agent's sensor view.
    Policy(Box<dyn Policy>),
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::External => write!(f, "External"),
            Self::Policy(_) => write!(f, "Policy(..)"),
        }
    }
}

/// One agent's starting state.
#[derive(Debug)]
pub struct AgentSpec {
    /// Starting head cell.
    pub start: Cell,
    /// Starting heading.
    pub direction: Direction,
    /// Intent source.
    pub driver: Driver,
}

impl AgentSpec {
    /// An externally-driven agent.
    pub fn external(start: Cell, direction: Direction) -> Self {
        Self {
            start,
            direction,
            driver: Driver::External,
        }
    }

    /// A policy-driven agent.
    pub fn with_policy(start: Cell, direction: Direction, policy: Box<dyn Policy>) -> Self {
        Self {
            start,
            direction,
            driver: Driver::Policy(policy),
        }
    }
}

/// Everything needed to construct an episode.
///
/// Fields are public; `Episode::new` runs [`validate`](Self::validate)
/// so a hand-assembled configuration cannot produce a broken episode.
///
/// # Examples
///
/// ```
/// use slither_engine::{AgentSpec, EpisodeConfig};
/// use slither_core::{Cell, Direction};
/// use slither_space::BoundaryMode;
///
/// let mut config = EpisodeConfig::new(20, 20, BoundaryMode::Toroidal);
/// config.seed = Some(42);
/// config.agents.push(AgentSpec::external(Cell::new(10, 10), Direction::East));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug)]
pub struct EpisodeConfig {
    /// Board width.
    pub width: u32,
    /// Board height.
    pub height: u32,
    /// Edge behavior.
    pub mode: BoundaryMode,
    /// Food cells the pool replenishes toward each tick.
    pub max_food: usize,
    /// Tick count after which a running episode ends, if any.
    pub step_budget: Option<u64>,
    /// RNG seed; entropy-seeded when absent (non-reproducible).
    pub seed: Option<u64>,
    /// Reward constants.
    pub rewards: RewardTable,
    /// Agents, in identity order (`AgentId` is the index here).
    pub agents: Vec<AgentSpec>,
    /// Deterministic initial food placements, counted against
    /// `max_food`; random replenishment tops up the remainder.
    pub initial_food: Vec<Cell>,
}

impl EpisodeConfig {
    /// A configuration with no agents, one food cell, default rewards.
    pub fn new(width: u32, height: u32, mode: BoundaryMode) -> Self {
        Self {
            width,
            height,
            mode,
            max_food: 1,
            step_budget: None,
            seed: None,
            rewards: RewardTable::default(),
            agents: Vec::new(),
            initial_food: Vec::new(),
        }
    }

    /// Check the configuration and build its board.
    ///
    /// # Errors
    ///
    /// See [`ConfigError`]; the first problem found is reported.
    pub fn validate(&self) -> Result<Board, ConfigError> {
        let board = Board::new(self.width, self.height, self.mode)?;
        if self.agents.is_empty() {
            return Err(ConfigError::NoAgents);
        }
        let mut claimed: IndexSet<Cell> = IndexSet::with_capacity(self.agents.len());
        for (index, spec) in self.agents.iter().enumerate() {
            if !board.contains(spec.start) {
                return Err(ConfigError::StartOutOfBounds {
                    index,
                    cell: spec.start,
                });
            }
            if !claimed.insert(spec.start) {
                return Err(ConfigError::StartOverlap {
                    index,
                    cell: spec.start,
                });
            }
        }
        for &cell in &self.initial_food {
            if !board.contains(cell) {
                return Err(ConfigError::FoodOutOfBounds { cell });
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slither_space::SpaceError;

    fn base() -> EpisodeConfig {
        let mut config = EpisodeConfig::new(10, 10, BoundaryMode::Toroidal);
        config
            .agents
            .push(AgentSpec::external(Cell::new(5, 5), Direction::East));
        config
    }

    #[test]
    fn valid_config_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn empty_agent_list_is_rejected() {
        let mut config = base();
        config.agents.clear();
        assert_eq!(config.validate().unwrap_err(), ConfigError::NoAgents);
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        let mut config = base();
        config.width = 0;
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::Board(SpaceError::EmptyBoard)
        );
    }

    #[test]
    fn off_board_start_is_rejected() {
        let mut config = base();
        config
            .agents
            .push(AgentSpec::external(Cell::new(10, 5), Direction::East));
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::StartOutOfBounds {
                index: 1,
                cell: Cell::new(10, 5)
            }
        );
    }

    #[test]
    fn overlapping_starts_are_rejected() {
        let mut config = base();
        config
            .agents
            .push(AgentSpec::external(Cell::new(5, 5), Direction::West));
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::StartOverlap {
                index: 1,
                cell: Cell::new(5, 5)
            }
        );
    }

    #[test]
    fn off_board_initial_food_is_rejected() {
        let mut config = base();
        config.initial_food.push(Cell::new(-1, 0));
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::FoodOutOfBounds {
                cell: Cell::new(-1, 0)
            }
        );
    }
}
