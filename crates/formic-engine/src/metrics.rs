//! Per-tick metrics for the simulation engine.
//!
//! [`TickMetrics`] captures timing and population counts for a single
//! tick. This is the engine's observability surface: consumers read the
//! most recent tick's metrics from
//! [`last_metrics()`](crate::SimulationWorld::last_metrics) or from the
//! step result.

/// Timing and population metrics collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent applying the submitted command batch.
    pub command_processing_us: u64,
    /// Time spent decaying both scalar fields.
    pub field_decay_us: u64,
    /// Time spent stamping due food-source footprints.
    pub source_refresh_us: u64,
    /// Time spent sensing, steering, and moving agents.
    pub agent_update_us: u64,
    /// Agents alive after this tick.
    pub agents_active: u32,
    /// Food sources alive after this tick.
    pub sources_active: u32,
    /// Food sources whose footprint was stamped this tick.
    pub sources_refreshed: u32,
    /// Commands that changed world state this tick.
    pub commands_applied: u32,
    /// Commands that resolved to the defined no-op outcome this tick.
    pub commands_noop: u32,
}
