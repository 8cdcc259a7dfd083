//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input to world construction. Construction is
//! the only place invalid input can enter the core (every runtime
//! operation is total), so [`validate()`](WorldConfig::validate)
//! rejects everything up front: a constructed world never fails to
//! tick.

use std::error::Error;
use std::fmt;

use formic_core::Point;
use formic_dynamics::{AgentParams, PheromoneParams, SmellParams};
use formic_grid::{GridError, GridSpec};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The grid geometry is invalid.
    Grid(GridError),
    /// Pheromone decay factor outside `(0, 1]` or non-finite.
    InvalidDecayFactor {
        /// The offending value.
        value: f32,
    },
    /// Pheromone deposit amount outside `(0, 1]` or non-finite.
    InvalidDepositAmount {
        /// The offending value.
        value: f32,
    },
    /// Smell decay amount not positive or non-finite.
    InvalidDecayAmount {
        /// The offending value.
        value: f32,
    },
    /// Emission strength not positive or non-finite.
    InvalidEmissionStrength {
        /// The offending value.
        value: f32,
    },
    /// Emission radius not positive or non-finite.
    InvalidEmissionRadius {
        /// The offending value.
        value: f32,
    },
    /// Source refresh period of zero ticks.
    ZeroRefreshPeriod,
    /// Removal tolerance negative or non-finite.
    InvalidRemovalTolerance {
        /// The offending value.
        value: f32,
    },
    /// Agent speed not positive or non-finite.
    InvalidSpeed {
        /// The offending value.
        value: f32,
    },
    /// Heading-change period of zero ticks.
    ZeroHeadingChangePeriod,
    /// Heading perturbation sigma negative or non-finite.
    InvalidHeadingSigma {
        /// The offending value.
        value: f32,
    },
    /// The spawn point lies outside the habitable world rectangle.
    SpawnPointOutOfBounds {
        /// The offending point.
        point: Point,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::InvalidDecayFactor { value } => {
                write!(f, "pheromone decay factor must be in (0, 1], got {value}")
            }
            Self::InvalidDepositAmount { value } => {
                write!(f, "pheromone deposit amount must be in (0, 1], got {value}")
            }
            Self::InvalidDecayAmount { value } => {
                write!(f, "smell decay amount must be finite and positive, got {value}")
            }
            Self::InvalidEmissionStrength { value } => {
                write!(f, "emission strength must be finite and positive, got {value}")
            }
            Self::InvalidEmissionRadius { value } => {
                write!(f, "emission radius must be finite and positive, got {value}")
            }
            Self::ZeroRefreshPeriod => write!(f, "refresh period must be at least 1 tick"),
            Self::InvalidRemovalTolerance { value } => {
                write!(f, "removal tolerance must be finite and non-negative, got {value}")
            }
            Self::InvalidSpeed { value } => {
                write!(f, "agent speed must be finite and positive, got {value}")
            }
            Self::ZeroHeadingChangePeriod => {
                write!(f, "heading change period must be at least 1 tick")
            }
            Self::InvalidHeadingSigma { value } => {
                write!(f, "heading sigma must be finite and non-negative, got {value}")
            }
            Self::SpawnPointOutOfBounds { point } => {
                write!(f, "spawn point {point} lies outside the world")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a simulation world.
///
/// All tunables are fixed at construction; nothing here is
/// runtime-mutable. The defaults carry the tuned constants of the
/// classic 800×450 world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    /// Continuous world width, in world units.
    pub world_width: f32,
    /// Continuous world height, in world units.
    pub world_height: f32,
    /// Cell edge length shared by both scalar fields, in world units.
    pub cell_size: f32,
    /// RNG seed for deterministic simulation.
    pub seed: u64,
    /// Where spawned agents appear.
    pub spawn_point: Point,
    /// Pheromone field tunables.
    pub pheromone: PheromoneParams,
    /// Smell field and food-source tunables.
    pub smell: SmellParams,
    /// Agent steering tunables.
    pub agent: AgentParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 450.0,
            cell_size: 10.0,
            seed: 0,
            spawn_point: Point::new(40.0, 225.0),
            pheromone: PheromoneParams::default(),
            smell: SmellParams::default(),
            agent: AgentParams::default(),
        }
    }
}

impl WorldConfig {
    /// Validate all structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, in the order of the
    /// checks below.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid geometry (world size, cell size, at least one cell).
        let grid = GridSpec::new(self.world_width, self.world_height, self.cell_size)?;

        // 2. Pheromone tunables.
        let p = &self.pheromone;
        if !p.decay_factor.is_finite() || p.decay_factor <= 0.0 || p.decay_factor > 1.0 {
            return Err(ConfigError::InvalidDecayFactor {
                value: p.decay_factor,
            });
        }
        if !p.deposit_amount.is_finite() || p.deposit_amount <= 0.0 || p.deposit_amount > 1.0 {
            return Err(ConfigError::InvalidDepositAmount {
                value: p.deposit_amount,
            });
        }

        // 3. Smell tunables.
        let s = &self.smell;
        if !s.decay_amount.is_finite() || s.decay_amount <= 0.0 {
            return Err(ConfigError::InvalidDecayAmount {
                value: s.decay_amount,
            });
        }
        if !s.emission_strength.is_finite() || s.emission_strength <= 0.0 {
            return Err(ConfigError::InvalidEmissionStrength {
                value: s.emission_strength,
            });
        }
        if !s.emission_radius.is_finite() || s.emission_radius <= 0.0 {
            return Err(ConfigError::InvalidEmissionRadius {
                value: s.emission_radius,
            });
        }
        if s.refresh_period == 0 {
            return Err(ConfigError::ZeroRefreshPeriod);
        }
        if !s.removal_tolerance.is_finite() || s.removal_tolerance < 0.0 {
            return Err(ConfigError::InvalidRemovalTolerance {
                value: s.removal_tolerance,
            });
        }

        // 4. Agent tunables.
        let a = &self.agent;
        if !a.speed.is_finite() || a.speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed { value: a.speed });
        }
        if a.heading_change_period == 0 {
            return Err(ConfigError::ZeroHeadingChangePeriod);
        }
        if !a.heading_sigma_degrees.is_finite() || a.heading_sigma_degrees < 0.0 {
            return Err(ConfigError::InvalidHeadingSigma {
                value: a.heading_sigma_degrees,
            });
        }

        // 5. Spawn point inside the habitable rectangle, the range
        //    agent positions are clamped into, so the position
        //    invariant holds from the first tick.
        let sp = self.spawn_point;
        if !sp.x.is_finite()
            || !sp.y.is_finite()
            || sp.x < 0.0
            || sp.x > grid.world_width() - 1.0
            || sp.y < 0.0
            || sp.y > grid.world_height() - 1.0
        {
            return Err(ConfigError::SpawnPointOutOfBounds { point: sp });
        }

        Ok(())
    }

    /// The grid geometry this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] for invalid geometry; `validate()` reports
    /// the same failure as [`ConfigError::Grid`].
    pub fn grid(&self) -> Result<GridSpec, GridError> {
        GridSpec::new(self.world_width, self.world_height, self.cell_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(WorldConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_cell_size() {
        let cfg = WorldConfig {
            cell_size: 0.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::InvalidCellSize { .. }))
        ));
    }

    #[test]
    fn rejects_world_smaller_than_a_cell() {
        let cfg = WorldConfig {
            world_width: 5.0,
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Grid(GridError::EmptyGrid { .. }))
        ));
    }

    #[test]
    fn rejects_decay_factor_above_one() {
        let mut cfg = WorldConfig::default();
        cfg.pheromone.decay_factor = 1.5;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDecayFactor { .. })
        ));
    }

    #[test]
    fn rejects_nan_decay_factor() {
        let mut cfg = WorldConfig::default();
        cfg.pheromone.decay_factor = f32::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDecayFactor { .. })
        ));
    }

    #[test]
    fn rejects_zero_deposit() {
        let mut cfg = WorldConfig::default();
        cfg.pheromone.deposit_amount = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDepositAmount { .. })
        ));
    }

    #[test]
    fn rejects_zero_smell_decay() {
        let mut cfg = WorldConfig::default();
        cfg.smell.decay_amount = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidDecayAmount { .. })
        ));
    }

    #[test]
    fn rejects_nonpositive_radius_and_strength() {
        let mut cfg = WorldConfig::default();
        cfg.smell.emission_radius = -3.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidEmissionRadius { .. })
        ));
        let mut cfg = WorldConfig::default();
        cfg.smell.emission_strength = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidEmissionStrength { .. })
        ));
    }

    #[test]
    fn rejects_zero_periods() {
        let mut cfg = WorldConfig::default();
        cfg.smell.refresh_period = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroRefreshPeriod));
        let mut cfg = WorldConfig::default();
        cfg.agent.heading_change_period = 0;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroHeadingChangePeriod));
    }

    #[test]
    fn rejects_zero_speed() {
        let mut cfg = WorldConfig::default();
        cfg.agent.speed = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidSpeed { .. })));
    }

    #[test]
    fn rejects_negative_sigma() {
        let mut cfg = WorldConfig::default();
        cfg.agent.heading_sigma_degrees = -1.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidHeadingSigma { .. })
        ));
    }

    #[test]
    fn zero_sigma_is_allowed() {
        // A zero-sigma walk never turns; legal, if dull.
        let mut cfg = WorldConfig::default();
        cfg.agent.heading_sigma_degrees = 0.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_spawn_point_outside_world() {
        let cfg = WorldConfig {
            spawn_point: Point::new(900.0, 10.0),
            ..WorldConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::SpawnPointOutOfBounds { .. })
        ));
    }

    #[test]
    fn error_display_names_the_field() {
        let err = ConfigError::InvalidSpeed { value: -2.0 };
        let msg = err.to_string();
        assert!(msg.contains("speed"));
        assert!(msg.contains("-2"));
    }

    #[test]
    fn grid_error_is_source_chained() {
        use std::error::Error as _;
        let err = ConfigError::Grid(GridError::InvalidCellSize { value: 0.0 });
        assert!(err.source().is_some());
    }
}
