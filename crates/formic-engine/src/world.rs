//! The simulation world: state ownership and tick orchestration.

use std::time::Instant;

use formic_core::{AgentId, Command, CommandOutcome, Receipt, SourceId, TickId};
use formic_dynamics::{Agent, FoodSmellField, PheromoneField};
use formic_grid::GridSpec;
use indexmap::IndexMap;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::TickMetrics;

// ── Snapshot types ──────────────────────────────────────────────

/// One agent's pose as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentPose {
    /// Stable agent identifier.
    pub id: AgentId,
    /// Position in world units.
    pub x: f32,
    /// Position in world units.
    pub y: f32,
    /// Heading in degrees, in `[0, 360)`.
    pub heading_degrees: f32,
}

/// One food source's position as seen by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourcePose {
    /// Stable source identifier.
    pub id: SourceId,
    /// Position in world units.
    pub x: f32,
    /// Position in world units.
    pub y: f32,
}

/// Read-only view of world state between ticks.
///
/// Borrows from the world, so the borrow checker prevents ticking while
/// a snapshot is alive: external readers always observe a consistent
/// end-of-tick state.
pub struct WorldSnapshot<'w> {
    world: &'w SimulationWorld,
}

impl WorldSnapshot<'_> {
    /// The tick this state resulted from (`TickId(0)` before any tick).
    pub fn tick_id(&self) -> TickId {
        self.world.tick
    }

    /// The grid geometry shared by both field grids.
    pub fn grid(&self) -> &GridSpec {
        &self.world.grid
    }

    /// Agent poses in spawn order.
    pub fn agents(&self) -> impl Iterator<Item = AgentPose> + '_ {
        self.world.agents.values().map(|a| AgentPose {
            id: a.id(),
            x: a.position().x,
            y: a.position().y,
            heading_degrees: a.heading_degrees(),
        })
    }

    /// Food-source positions in creation order.
    pub fn food_sources(&self) -> impl Iterator<Item = SourcePose> + '_ {
        self.world.smell.sources().map(|s| SourcePose {
            id: s.id(),
            x: s.position().x,
            y: s.position().y,
        })
    }

    /// The pheromone grid, row-major, `rows × cols` long.
    pub fn pheromone(&self) -> &[f32] {
        self.world.pheromone.field().values()
    }

    /// The smell grid, row-major, `rows × cols` long.
    pub fn smell(&self) -> &[f32] {
        self.world.smell.field().values()
    }
}

/// Result of one [`SimulationWorld::tick()`] call.
pub struct StepResult<'w> {
    /// Read-only snapshot of world state after this tick.
    pub snapshot: WorldSnapshot<'w>,
    /// Per-command receipts, in submission order.
    pub receipts: Vec<Receipt>,
    /// Metrics for this tick.
    pub metrics: TickMetrics,
}

// ── SimulationWorld ─────────────────────────────────────────────

/// Single-threaded simulation world.
///
/// Owns the authoritative copy of all simulation state and mutates it
/// only inside [`tick()`](Self::tick). Ticking is infallible: every
/// runtime operation is total over its domain, and the one fallible
/// step, configuration, happens eagerly in [`new()`](Self::new).
///
/// # Example
///
/// ```
/// use formic_core::Command;
/// use formic_engine::{SimulationWorld, WorldConfig};
///
/// let mut world = SimulationWorld::new(WorldConfig::default()).unwrap();
/// let result = world.tick(vec![Command::SpawnAgent]);
/// assert_eq!(result.snapshot.agents().count(), 1);
/// ```
pub struct SimulationWorld {
    config: WorldConfig,
    grid: GridSpec,
    tick: TickId,
    pheromone: PheromoneField,
    smell: FoodSmellField,
    agents: IndexMap<AgentId, Agent>,
    next_agent: u64,
    rng: ChaCha8Rng,
    last_metrics: TickMetrics,
}

impl SimulationWorld {
    /// Create a world from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration fails validation.
    /// This is the core's only failure point.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.grid()?;
        Ok(Self {
            config,
            grid,
            tick: TickId(0),
            pheromone: PheromoneField::new(grid, config.pheromone),
            smell: FoodSmellField::new(grid, config.smell),
            agents: IndexMap::new(),
            next_agent: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Advance the world one tick.
    ///
    /// Phase order is part of the contract: later phases read state
    /// written by earlier ones within the same tick:
    ///
    /// 1. apply `commands`, exactly once each, in submission order;
    /// 2. decay the smell field;
    /// 3. stamp due food-source footprints;
    /// 4. decay the pheromone field;
    /// 5. update agents in spawn order, each sensing the already-decayed
    ///    smell field and depositing into the already-decayed pheromone
    ///    field. Agents never observe each other.
    pub fn tick(&mut self, commands: Vec<Command>) -> StepResult<'_> {
        let tick_start = Instant::now();
        let mut metrics = TickMetrics::default();
        self.tick = self.tick.next();

        let commands_start = Instant::now();
        let receipts: Vec<Receipt> = commands
            .into_iter()
            .enumerate()
            .map(|(command_index, command)| {
                let outcome = self.apply_command(command);
                if outcome.applied() {
                    metrics.commands_applied += 1;
                } else {
                    metrics.commands_noop += 1;
                }
                Receipt {
                    command_index,
                    applied_tick: self.tick,
                    outcome,
                }
            })
            .collect();
        metrics.command_processing_us = elapsed_us(commands_start);

        let decay_start = Instant::now();
        self.smell.decay_tick();
        metrics.field_decay_us = elapsed_us(decay_start);

        let refresh_start = Instant::now();
        metrics.sources_refreshed = self.smell.refresh_sources();
        metrics.source_refresh_us = elapsed_us(refresh_start);

        let decay_start = Instant::now();
        self.pheromone.decay_tick();
        metrics.field_decay_us += elapsed_us(decay_start);

        let agents_start = Instant::now();
        for agent in self.agents.values_mut() {
            agent.update(
                &self.config.agent,
                &self.smell,
                &mut self.pheromone,
                &mut self.rng,
            );
        }
        metrics.agent_update_us = elapsed_us(agents_start);

        metrics.agents_active = self.agents.len() as u32;
        metrics.sources_active = self.smell.source_count() as u32;
        metrics.total_us = elapsed_us(tick_start);
        self.last_metrics = metrics.clone();

        StepResult {
            snapshot: WorldSnapshot { world: self },
            receipts,
            metrics,
        }
    }

    /// Reset the world to tick 0 with a new seed.
    ///
    /// Drops all agents and food sources, zeroes both fields, and
    /// reseeds the RNG. The configuration is unchanged.
    pub fn reset(&mut self, seed: u64) {
        self.tick = TickId(0);
        self.pheromone = PheromoneField::new(self.grid, self.config.pheromone);
        self.smell = FoodSmellField::new(self.grid, self.config.smell);
        self.agents.clear();
        self.next_agent = 0;
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.last_metrics = TickMetrics::default();
    }

    /// Read-only snapshot of the current state.
    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot { world: self }
    }

    /// Current tick (`TickId(0)` after construction or reset).
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// The current simulation seed.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    /// Apply one command, returning its outcome.
    fn apply_command(&mut self, command: Command) -> CommandOutcome {
        match command {
            Command::SpawnAgent => {
                let id = AgentId(self.next_agent);
                self.next_agent += 1;
                let agent = Agent::spawn(id, self.config.spawn_point, &mut self.rng);
                self.agents.insert(id, agent);
                CommandOutcome::Applied
            }
            Command::DespawnAgent => {
                // Oldest-first: index 0 of spawn order.
                if self.agents.shift_remove_index(0).is_some() {
                    CommandOutcome::Applied
                } else {
                    CommandOutcome::NoAgents
                }
            }
            Command::AddFoodSource { at } => {
                self.smell.add_source(at);
                CommandOutcome::Applied
            }
            Command::RemoveClosestFoodSource { at } => {
                match self.smell.remove_closest_source(at) {
                    Some(_) => CommandOutcome::Applied,
                    None => CommandOutcome::NoSourceInRange,
                }
            }
        }
    }
}

impl std::fmt::Debug for SimulationWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationWorld")
            .field("tick", &self.tick)
            .field("seed", &self.config.seed)
            .field("agents", &self.agents.len())
            .field("sources", &self.smell.source_count())
            .finish()
    }
}

fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}
