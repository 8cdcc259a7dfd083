//! Inbound commands and per-command receipts.
//!
//! Commands are the only way an external driver mutates a running world:
//! one command per user action, applied exactly once, in submission
//! order, at the top of the next tick. Each submitted command yields one
//! [`Receipt`] at the matching position of the step result.
//!
//! A command that finds nothing to act on (despawn with zero agents,
//! remove-food with no source in tolerance) is a no-op by contract, not
//! an error; the receipt records the outcome and the tick proceeds.

use crate::geom::Point;
use crate::id::TickId;

/// A command submitted to the simulation world.
///
/// # Examples
///
/// ```
/// use formic_core::{Command, Point};
///
/// let cmds = vec![
///     Command::SpawnAgent,
///     Command::AddFoodSource { at: Point::new(55.0, 55.0) },
/// ];
/// assert_eq!(cmds.len(), 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Spawn one agent at the configured spawn point with a uniformly
    /// random initial heading.
    SpawnAgent,
    /// Remove the oldest surviving agent. No-op if no agents exist.
    DespawnAgent,
    /// Create a food source at the given world position.
    AddFoodSource {
        /// Where the source sits, in world units.
        at: Point,
    },
    /// Remove the food source closest to the given position, if one lies
    /// within the configured removal tolerance. No-op otherwise.
    RemoveClosestFoodSource {
        /// The query position, in world units.
        at: Point,
    },
}

/// What happened when a command was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The command took effect.
    Applied,
    /// A despawn found zero agents.
    NoAgents,
    /// A remove-food found no source within tolerance.
    NoSourceInRange,
}

impl CommandOutcome {
    /// Whether the command changed world state.
    pub fn applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Receipt returned for each command in a submitted batch.
///
/// Receipts come back in submission order; `command_index` is the
/// command's position within the submitted batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Index of this command within the submitted batch.
    pub command_index: usize,
    /// The tick during which the command was applied.
    pub applied_tick: TickId,
    /// What the application did.
    pub outcome: CommandOutcome,
}
