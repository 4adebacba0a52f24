//! Per-tick counters surfaced alongside tick results.

use std::fmt;

/// Cheap counters describing one tick.
///
/// These are plain data, recomputed every tick; they carry no history.
/// Callers that want time series accumulate them outside the engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Agents still alive after the tick.
    pub live_agents: usize,
    /// Food cells on the board after replenishment.
    pub food: usize,
    /// Agents that died this tick.
    pub deaths: usize,
    /// Fruit consumed this tick.
    pub eats: usize,
}

impl fmt::Display for TickMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "live={} food={} deaths={} eats={}",
            self.live_agents, self.food, self.deaths, self.eats
        )
    }
}
