//! The episode state machine and tick loop.

use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slither_core::{AgentId, Cell, Direction, SensorView, TickId, TileProbe};
use slither_obs::sense;
use slither_space::Board;

use crate::agent::Snake;
use crate::config::{Driver, EpisodeConfig, RewardTable};
use crate::error::ConfigError;
use crate::food::FoodPool;
use crate::metrics::TickMetrics;
use crate::resolver::{resolve, DeathCause, MoveProposal, Verdict};

/// Whether an episode is still accepting ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EpisodeState {
    /// At least one agent is alive and the step budget is not spent.
    Running,
    /// Terminal; further ticks are no-ops.
    Over,
}

/// Everything one tick produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TickResult {
    /// The tick counter after this tick.
    pub tick: TickId,
    /// Episode state after this tick.
    pub state: EpisodeState,
    /// Per-agent reward delta for this tick, in arena order, covering
    /// every agent that was alive when the tick began.
    pub rewards: Vec<(AgentId, f64)>,
    /// Agents that died this tick and why.
    pub deaths: Vec<(AgentId, DeathCause)>,
    /// Agents whose head landed on food this tick (dying eaters
    /// included; the fruit is consumed either way).
    pub eats: Vec<AgentId>,
    /// Post-tick counters.
    pub metrics: TickMetrics,
}

/// Terminal statistics from [`Episode::run_to_end`].
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    /// The tick at which the episode ended.
    pub final_tick: TickId,
    /// Cumulative score per agent, dead agents included.
    pub scores: Vec<(AgentId, f64)>,
    /// Agents still alive at the end.
    pub survivors: usize,
}

/// A read-only picture of the board for rendering and inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardSnapshot {
    /// Current tick counter.
    pub tick: TickId,
    /// The board the episode runs on.
    pub board: Board,
    /// Live bodies, oldest segment first, head last.
    pub bodies: Vec<(AgentId, Vec<Cell>)>,
    /// Food cells.
    pub food: Vec<Cell>,
}

#[derive(Debug)]
struct AgentSlot {
    snake: Snake,
    driver: Driver,
    alive: bool,
    score: f64,
    // Nearest-food distance after the previous tick, the distance
    // shaping baseline. None until first measured.
    food_distance: Option<u32>,
}

/// Occupancy as the sensor layer sees it: live bodies block, food cells
/// hold fruit.
struct OccupancyProbe<'a> {
    agents: &'a IndexMap<AgentId, AgentSlot>,
    food: &'a FoodPool,
}

impl TileProbe for OccupancyProbe<'_> {
    fn blocked(&self, cell: Cell) -> bool {
        self.agents
            .values()
            .any(|slot| slot.alive && slot.snake.occupies(cell))
    }

    fn fruit(&self, cell: Cell) -> bool {
        self.food.contains(cell)
    }
}

/// One bounded run of the simulation: board, agents, food, RNG.
///
/// The episode exclusively owns all mutable simulation state. Callers
/// drive it one synchronous [`tick`](Episode::tick) at a time, observe
/// through [`snapshot`](Episode::snapshot) and per-tick results, and
/// never mutate engine state directly.
///
/// Two episodes constructed from equal configurations with the same
/// seed produce identical tick-by-tick results.
#[derive(Debug)]
pub struct Episode {
    board: Board,
    food: FoodPool,
    agents: IndexMap<AgentId, AgentSlot>,
    tick: TickId,
    state: EpisodeState,
    rng: ChaCha8Rng,
    rewards: RewardTable,
    step_budget: Option<u64>,
}

impl Episode {
    /// Build and seed an episode from a validated configuration.
    ///
    /// Initial food placements are applied first, then the pool is
    /// replenished toward `max_food`. Distance-shaping baselines are
    /// not measured until the end of the first tick, so the first tick
    /// never carries a shaping delta.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`EpisodeConfig::validate`].
    pub fn new(config: EpisodeConfig) -> Result<Self, ConfigError> {
        let board = config.validate()?;
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut agents: IndexMap<AgentId, AgentSlot> =
            IndexMap::with_capacity(config.agents.len());
        for (index, spec) in config.agents.into_iter().enumerate() {
            agents.insert(
                AgentId(index as u32),
                AgentSlot {
                    snake: Snake::new(spec.start, spec.direction),
                    driver: spec.driver,
                    alive: true,
                    score: 0.0,
                    food_distance: None,
                },
            );
        }

        let mut food = FoodPool::new(config.max_food);
        for cell in config.initial_food {
            food.place(cell);
        }
        food.replenish(
            &board,
            |cell| agents.values().any(|slot| slot.snake.occupies(cell)),
            &mut rng,
        );

        Ok(Self {
            board,
            food,
            agents,
            tick: TickId(0),
            state: EpisodeState::Running,
            rng,
            rewards: config.rewards,
            step_budget: config.step_budget,
        })
    }

    /// The board this episode runs on.
    pub fn board(&self) -> Board {
        self.board
    }

    /// Current tick counter: the number of ticks executed so far.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Current state.
    pub fn state(&self) -> EpisodeState {
        self.state
    }

    /// Number of live agents.
    pub fn live_agents(&self) -> usize {
        self.agents.values().filter(|slot| slot.alive).count()
    }

    /// Whether `id` names a live agent.
    pub fn is_live(&self, id: AgentId) -> bool {
        self.agents.get(&id).is_some_and(|slot| slot.alive)
    }

    /// Cumulative score for one agent, dead or alive.
    pub fn score(&self, id: AgentId) -> Option<f64> {
        self.agents.get(&id).map(|slot| slot.score)
    }

    /// Cumulative scores for every agent, in arena order.
    pub fn scores(&self) -> Vec<(AgentId, f64)> {
        self.agents
            .iter()
            .map(|(&id, slot)| (id, slot.score))
            .collect()
    }

    /// The rotated sensor view a live agent would observe right now.
    ///
    /// `None` for dead or unknown agents. This is exactly what the
    /// engine feeds a [`Driver::Policy`] agent at the start of a tick.
    pub fn sensor_view(&self, id: AgentId) -> Option<SensorView> {
        self.is_live(id).then(|| self.view_for(id))
    }

    /// A read-only picture of live bodies, food, and the tick counter.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tick: self.tick,
            board: self.board,
            bodies: self
                .agents
                .iter()
                .filter(|(_, slot)| slot.alive)
                .map(|(&id, slot)| (id, slot.snake.segments().collect()))
                .collect(),
            food: self.food.cells().collect(),
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// `intents` carries absolute directions for externally-driven
    /// agents; entries naming dead, unknown, or policy-driven agents
    /// are ignored, as is any reversal (the snake continues straight).
    /// When one agent appears more than once the last entry wins.
    /// Policy-driven agents compute their own intent from the pre-tick
    /// sensor view.
    ///
    /// Ticking an [`EpisodeState::Over`] episode changes nothing and
    /// reports empty deltas.
    pub fn tick(&mut self, intents: &[(AgentId, Direction)]) -> TickResult {
        if self.state == EpisodeState::Over {
            return TickResult {
                tick: self.tick,
                state: EpisodeState::Over,
                rewards: Vec::new(),
                deaths: Vec::new(),
                eats: Vec::new(),
                metrics: TickMetrics {
                    live_agents: self.live_agents(),
                    food: self.food.len(),
                    deaths: 0,
                    eats: 0,
                },
            };
        }

        let live: Vec<AgentId> = self
            .agents
            .iter()
            .filter(|(_, slot)| slot.alive)
            .map(|(&id, _)| id)
            .collect();

        // Pre-tick sensor views for policy agents, before anything moves.
        let views: Vec<Option<SensorView>> = live
            .iter()
            .map(|&id| match self.agents[&id].driver {
                Driver::Policy(_) => Some(self.view_for(id)),
                Driver::External => None,
            })
            .collect();

        let mut moves: Vec<(AgentId, Direction, Cell)> = Vec::with_capacity(live.len());
        for (&id, view) in live.iter().zip(&views) {
            let slot = self.agents.get_mut(&id).expect("live agent present");
            let heading = slot.snake.direction();
            let intent = match (&mut slot.driver, view) {
                (Driver::Policy(policy), Some(view)) => Some(heading.turn(policy.decide(view))),
                _ => intents
                    .iter()
                    .rev()
                    .find(|&&(target, _)| target == id)
                    .map(|&(_, direction)| direction),
            };
            let (direction, raw_head) = slot.snake.propose_move(intent);
            moves.push((id, direction, self.board.normalize(raw_head)));
        }

        let verdicts: Vec<Verdict> = {
            let batch: Vec<MoveProposal<'_>> = moves
                .iter()
                .map(|&(id, _, head)| MoveProposal {
                    snake: &self.agents[&id].snake,
                    head,
                })
                .collect();
            resolve(&self.board, &self.food, &batch)
        };

        let mut rewards: Vec<(AgentId, f64)> = Vec::with_capacity(moves.len());
        let mut deaths: Vec<(AgentId, DeathCause)> = Vec::new();
        let mut eats: Vec<AgentId> = Vec::new();
        for (&(id, direction, head), verdict) in moves.iter().zip(&verdicts) {
            if verdict.ate {
                self.food.consume(head);
                eats.push(id);
            }
            let slot = self.agents.get_mut(&id).expect("live agent present");
            let delta = match verdict.death {
                Some(cause) => {
                    slot.alive = false;
                    deaths.push((id, cause));
                    self.rewards.death
                }
                None => {
                    slot.snake.commit(head, direction, verdict.ate);
                    if verdict.ate {
                        self.rewards.fruit
                    } else {
                        0.0
                    }
                }
            };
            slot.score += delta;
            rewards.push((id, delta));
        }

        let agents = &self.agents;
        self.food.replenish(
            &self.board,
            |cell| {
                agents
                    .values()
                    .any(|slot| slot.alive && slot.snake.occupies(cell))
            },
            &mut self.rng,
        );

        // Distance shaping last, against final positions and food.
        for (index, &(id, _, _)) in moves.iter().enumerate() {
            let slot = &self.agents[&id];
            if !slot.alive {
                continue;
            }
            let previous = slot.food_distance;
            let nearest = self.food.nearest_distance(&self.board, slot.snake.head());
            let shaping = match (previous, nearest) {
                (Some(old), Some(new)) if new < old => self.rewards.distance,
                (Some(old), Some(new)) if new > old => -self.rewards.distance,
                _ => 0.0,
            };
            let slot = self.agents.get_mut(&id).expect("live agent present");
            slot.food_distance = nearest;
            slot.score += shaping;
            rewards[index].1 += shaping;
        }

        self.tick = TickId(self.tick.0 + 1);
        let live_agents = self.live_agents();
        let budget_spent = self.step_budget.is_some_and(|budget| self.tick.0 >= budget);
        if live_agents == 0 || budget_spent {
            self.state = EpisodeState::Over;
        }

        TickResult {
            tick: self.tick,
            state: self.state,
            metrics: TickMetrics {
                live_agents,
                food: self.food.len(),
                deaths: deaths.len(),
                eats: eats.len(),
            },
            rewards,
            deaths,
            eats,
        }
    }

    /// Tick with no external intents until the episode is over.
    ///
    /// Meant for fully policy-driven episodes; an externally-driven
    /// agent just runs straight ahead. An episode with no step budget
    /// ends only when every agent has died.
    pub fn run_to_end(&mut self) -> EpisodeSummary {
        while self.state == EpisodeState::Running {
            self.tick(&[]);
        }
        EpisodeSummary {
            final_tick: self.tick,
            scores: self.scores(),
            survivors: self.live_agents(),
        }
    }

    fn view_for(&self, id: AgentId) -> SensorView {
        let slot = &self.agents[&id];
        let probe = OccupancyProbe {
            agents: &self.agents,
            food: &self.food,
        };
        sense(
            &self.board,
            &probe,
            slot.snake.head(),
            slot.snake.direction(),
        )
    }
}
