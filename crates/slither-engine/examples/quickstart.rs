//! Run a small policy-driven episode and print its outcome.
//!
//! ```sh
//! cargo run --example quickstart
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use slither_core::{Cell, Direction};
use slither_engine::{AgentSpec, Episode, EpisodeConfig};
use slither_policy::NeuroPolicy;
use slither_space::BoundaryMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = EpisodeConfig::new(20, 20, BoundaryMode::Toroidal);
    config.seed = Some(7);
    config.max_food = 3;
    config.step_budget = Some(500);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let starts = [
        (Cell::new(5, 5), Direction::East),
        (Cell::new(14, 5), Direction::South),
        (Cell::new(14, 14), Direction::West),
        (Cell::new(5, 14), Direction::North),
    ];
    for (start, direction) in starts {
        config.agents.push(AgentSpec::with_policy(
            start,
            direction,
            Box::new(NeuroPolicy::random(8, &mut rng)),
        ));
    }

    let mut episode = Episode::new(config)?;
    let summary = episode.run_to_end();

    println!(
        "episode over at tick {} with {} survivor(s)",
        summary.final_tick, summary.survivors
    );
    for (id, score) in summary.scores {
        println!("  agent {id}: {score:.1}");
    }
    Ok(())
}
