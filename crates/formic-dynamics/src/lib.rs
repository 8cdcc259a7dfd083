//! Field dynamics and agent steering for the Formic stigmergy simulation.
//!
//! Three moving parts, updated once per world tick:
//!
//! - [`PheromoneField`]: agents deposit here; uniform multiplicative
//!   decay per tick. Deposit-only in this core: nothing senses it.
//! - [`FoodSmellField`]: point sources emit here on a staggered
//!   schedule; uniform subtractive decay per tick. Agents sense it.
//! - [`Agent`]: reads the smell field, updates its own pose, writes the
//!   pheromone field.
//!
//! Parameter structs ([`PheromoneParams`], [`SmellParams`],
//! [`AgentParams`]) carry the per-component tunables; they are validated
//! once at world construction by the engine crate, so constructors here
//! are infallible.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod pheromone;
pub mod smell;

pub use agent::{Agent, AgentParams};
pub use pheromone::{PheromoneField, PheromoneParams};
pub use smell::{FoodSmellField, FoodSource, SmellParams};
