//! Benchmark profiles for the Formic stigmergy simulation.
//!
//! Provides pre-built [`WorldConfig`] profiles plus a populated-world
//! constructor shared by the criterion harnesses:
//!
//! - [`reference_profile`]: the classic 800×450 world, 80×45 cells
//! - [`stress_profile`]: a 3200×1800 world (~57K cells)
//! - [`populated_world`]: a world pre-loaded with agents and sources

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use formic_core::{Command, Point};
use formic_engine::{SimulationWorld, WorldConfig};

/// The classic 800×450 world with default tunables.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        seed,
        ..WorldConfig::default()
    }
}

/// A 3200×1800 world (~57K cells) for stress runs.
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig {
        world_width: 3200.0,
        world_height: 1800.0,
        seed,
        spawn_point: Point::new(160.0, 900.0),
        ..WorldConfig::default()
    }
}

/// Build a world and populate it with `agents` agents and `sources`
/// food sources spread along the horizontal midline.
///
/// # Panics
///
/// Panics if the profile fails validation; benchmark profiles are
/// expected to be valid by construction.
pub fn populated_world(config: WorldConfig, agents: u32, sources: u32) -> SimulationWorld {
    let width = config.world_width;
    let mid_y = config.world_height / 2.0;
    let mut world = SimulationWorld::new(config).expect("benchmark profile must validate");

    let mut commands: Vec<Command> = (0..agents).map(|_| Command::SpawnAgent).collect();
    for i in 0..sources {
        let x = width * (i as f32 + 1.0) / (sources as f32 + 1.0);
        commands.push(Command::AddFoodSource {
            at: Point::new(x, mid_y),
        });
    }
    world.tick(commands);
    world
}
