//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. `TickId(0)`
/// is the state before any tick has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies an agent within a simulation world.
///
/// Allocated sequentially at spawn time and never reused within a run,
/// so an `AgentId` remains unambiguous after the agent despawns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId(pub u64);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for AgentId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a food source within a simulation world.
///
/// Assigned at creation and used for removal lookup, so two sources at
/// the same position stay distinguishable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(pub u64);

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SourceId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
