//! The pheromone trail field.

use formic_core::Point;
use formic_grid::{GridSpec, ScalarField};

/// Tunables for the pheromone field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PheromoneParams {
    /// Multiplicative per-tick decay factor, in `(0, 1]`.
    pub decay_factor: f32,
    /// Intensity added to one cell per agent deposit, in `(0, 1]`.
    pub deposit_amount: f32,
}

impl Default for PheromoneParams {
    fn default() -> Self {
        Self {
            decay_factor: 0.995,
            deposit_amount: 0.5,
        }
    }
}

/// The decaying trail field agents deposit into.
///
/// Decay is multiplicative: trails thin out gradually and never
/// hard-clip while active, while inactive regions approach zero
/// asymptotically. Deposits are single-cell and saturating; finer
/// trail structure only emerges from decay and overlap over many ticks.
///
/// Nothing in this core senses the pheromone field; it is carried for
/// the snapshot readers.
#[derive(Clone, Debug)]
pub struct PheromoneField {
    field: ScalarField,
    params: PheromoneParams,
}

impl PheromoneField {
    /// Create an all-zero pheromone field.
    ///
    /// `params` must already be validated (see the engine crate's world
    /// configuration).
    pub fn new(spec: GridSpec, params: PheromoneParams) -> Self {
        Self {
            field: ScalarField::new(spec),
            params,
        }
    }

    /// Apply one tick of multiplicative decay.
    pub fn decay_tick(&mut self) {
        self.field.decay_multiplicative(self.params.decay_factor);
    }

    /// Deposit at the cell containing a continuous position.
    ///
    /// Saturating single-cell deposit; positions outside the grid are
    /// silently ignored per the field's no-op policy.
    pub fn deposit_at(&mut self, position: Point) {
        let cell = self.field.spec().cell_of(position);
        self.field.deposit_max(cell, self.params.deposit_amount);
    }

    /// Read-only access to the underlying intensities.
    pub fn field(&self) -> &ScalarField {
        &self.field
    }
}
