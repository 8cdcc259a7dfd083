//! Formic: a stigmergic foraging simulation core.
//!
//! Mobile agents ("ants") deposit and sense decaying scalar fields on a
//! discretized 2D plane, steering toward food sources without direct
//! communication. The core is presentation-free: it exposes a tick-based
//! update contract and read-only snapshots; rendering and input handling
//! live entirely outside.
//!
//! # Quick start
//!
//! ```rust
//! use formic::prelude::*;
//!
//! let config = WorldConfig::default();
//! let mut world = SimulationWorld::new(config).unwrap();
//!
//! // One frame: forward the user's actions, advance one tick, render
//! // from the snapshot.
//! let result = world.tick(vec![
//!     Command::SpawnAgent,
//!     Command::AddFoodSource { at: Point::new(400.0, 225.0) },
//! ]);
//! assert_eq!(result.snapshot.tick_id(), TickId(1));
//! assert_eq!(result.snapshot.agents().count(), 1);
//! assert!(result.receipts.iter().all(|r| r.outcome.applied()));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `formic-core` | IDs, geometry, commands, receipts |
//! | [`grid`] | `formic-grid` | Grid geometry and scalar-field storage |
//! | [`dynamics`] | `formic-dynamics` | Pheromone/smell fields and agent steering |
//! | [`engine`] | `formic-engine` | World configuration and tick orchestration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: IDs, geometry, commands, and receipts (`formic-core`).
pub use formic_core as types;

/// Grid geometry and clamped scalar-field storage (`formic-grid`).
pub use formic_grid as grid;

/// Field dynamics and agent steering (`formic-dynamics`).
pub use formic_dynamics as dynamics;

/// World configuration and tick orchestration (`formic-engine`).
pub use formic_engine as engine;

/// Common imports for typical Formic usage.
///
/// ```rust
/// use formic::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use formic_core::{
        AgentId, Cell, Command, CommandOutcome, Point, Receipt, SourceId, TickId,
    };

    // Grid
    pub use formic_grid::{GridError, GridSpec, ScalarField};

    // Dynamics
    pub use formic_dynamics::{
        Agent, AgentParams, FoodSmellField, FoodSource, PheromoneField, PheromoneParams,
        SmellParams,
    };

    // Engine
    pub use formic_engine::{
        AgentPose, ConfigError, SimulationWorld, SourcePose, StepResult, TickMetrics,
        WorldConfig, WorldSnapshot,
    };
}
