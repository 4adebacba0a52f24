//! Scripted policies and episode fixtures shared across Slither tests.
//!
//! Dev-dependency only; nothing here is part of the public simulation
//! API.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use slither_core::{Cell, Direction, Policy, SensorView, Steering};
use slither_engine::{AgentSpec, Episode, EpisodeConfig};
use slither_space::BoundaryMode;

/// A policy that always answers with the same steering command.
pub struct ConstantPolicy(pub Steering);

impl Policy for ConstantPolicy {
    fn decide(&mut self, _senses: &SensorView) -> Steering {
        self.0
    }
}

/// A policy that plays back a fixed script, then goes straight.
pub struct ScriptedPolicy {
    script: VecDeque<Steering>,
    pub views_seen: Vec<SensorView>,
}

impl ScriptedPolicy {
    pub fn new(script: impl IntoIterator<Item = Steering>) -> Self {
        Self {
            script: script.into_iter().collect(),
            views_seen: Vec::new(),
        }
    }
}

impl Policy for ScriptedPolicy {
    fn decide(&mut self, senses: &SensorView) -> Steering {
        self.views_seen.push(*senses);
        self.script.pop_front().unwrap_or(Steering::Straight)
    }
}

/// A 10x10 single-agent config: external driver at (5, 5) facing east,
/// seeded, no random food.
pub fn lone_external(mode: BoundaryMode) -> EpisodeConfig {
    let mut config = EpisodeConfig::new(10, 10, mode);
    config.seed = Some(0xDECADE);
    config.max_food = 0;
    config
        .agents
        .push(AgentSpec::external(Cell::new(5, 5), Direction::East));
    config
}

/// Build an episode or panic with the validation error.
pub fn episode(config: EpisodeConfig) -> Episode {
    Episode::new(config).expect("fixture config must validate")
}
