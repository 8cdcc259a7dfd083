//! Tick orchestration and world state for the Formic stigmergy
//! simulation.
//!
//! [`SimulationWorld`] is the user-facing API: construct it from a
//! validated [`WorldConfig`], call [`tick()`](SimulationWorld::tick)
//! once per frame with the commands gathered since the last frame, and
//! hand the returned [`WorldSnapshot`] to the presentation layer.
//!
//! # Ownership model
//!
//! The world exclusively owns all simulation state (both scalar
//! fields, the food-source registry, the agent list, and the RNG) and
//! mutates it only inside `tick()`. Snapshots borrow from the world, so
//! the borrow checker statically rules out reading state mid-tick.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use metrics::TickMetrics;
pub use world::{AgentPose, SimulationWorld, SourcePose, StepResult, WorldSnapshot};
