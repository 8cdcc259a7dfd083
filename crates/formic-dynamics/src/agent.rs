//! The agent steering state machine.
//!
//! Every tick an agent evaluates exactly one of two branches, fresh,
//! with no sticky mode:
//!
//! - **Gradient following**: some cell of the 9-cell Moore
//!   neighbourhood smells of food: step toward the strongest one.
//! - **Random walk**: nothing smells, so keep the current heading,
//!   perturbing it by a Gaussian draw once every
//!   `heading_change_period` ticks.
//!
//! Both branches end the same way: independent per-axis boundary
//! reflection, a final position clamp, and a pheromone deposit at the
//! cell the agent lands in.

use formic_core::{AgentId, Point};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::pheromone::PheromoneField;
use crate::smell::FoodSmellField;

/// Tunables shared by all agents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentParams {
    /// Distance covered per tick, in world units.
    pub speed: f32,
    /// Ticks between random-walk heading perturbations, `>= 1`.
    pub heading_change_period: u32,
    /// Standard deviation of the Gaussian heading perturbation, degrees.
    pub heading_sigma_degrees: f32,
}

impl Default for AgentParams {
    fn default() -> Self {
        Self {
            speed: 3.0,
            heading_change_period: 8,
            heading_sigma_degrees: 10.0,
        }
    }
}

/// The 9 Moore-neighbourhood offsets in row-major scan order.
///
/// The scan order is load-bearing: sensing ties break toward the first
/// offset found, so this enumeration is part of observable behaviour.
const OFFSETS_9: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A mobile agent: continuous pose plus random-walk cadence state.
#[derive(Clone, Copy, Debug)]
pub struct Agent {
    id: AgentId,
    position: Point,
    heading_degrees: f32,
    steps_since_heading_change: u32,
}

impl Agent {
    /// Spawn an agent at `position` with a uniformly random heading and
    /// a zero step counter.
    pub fn spawn(id: AgentId, position: Point, rng: &mut ChaCha8Rng) -> Self {
        Self {
            id,
            position,
            heading_degrees: rng.gen_range(0.0..360.0),
            steps_since_heading_change: 0,
        }
    }

    /// Stable identifier assigned at spawn.
    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Current position, always inside `[0, width-1] × [0, height-1]`
    /// after an update.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current heading in degrees, always in `[0, 360)`.
    pub fn heading_degrees(&self) -> f32 {
        self.heading_degrees
    }

    /// Advance one tick: sense, steer, reflect, move, deposit.
    pub fn update(
        &mut self,
        params: &AgentParams,
        smell: &FoodSmellField,
        pheromone: &mut PheromoneField,
        rng: &mut ChaCha8Rng,
    ) {
        let spec = *smell.field().spec();
        let cell = spec.cell_of(self.position);

        // Sense the Moore neighbourhood (own cell included). Strictly
        // greater keeps the first-found offset on ties; out-of-range
        // cells sample as zero and can never win.
        let mut best_intensity = 0.0f32;
        let mut best_offset = None;
        for (dcol, drow) in OFFSETS_9 {
            let intensity = smell.field().sample(cell.offset(dcol, drow));
            if intensity > best_intensity {
                best_intensity = intensity;
                best_offset = Some((dcol, drow));
            }
        }

        let (mut dx, mut dy) = match best_offset {
            Some((dcol, drow)) => {
                // Gradient following. The heading comes from the
                // rounded, speed-scaled offset, not the unit offset,
                // so diagonal and axis steps differ slightly.
                // Observable behaviour, kept as is.
                let dx = (dcol as f32 * params.speed).round();
                let dy = (drow as f32 * params.speed).round();
                self.heading_degrees = wrap_degrees(dy.atan2(dx).to_degrees());
                // The walk counter keeps running: leaving a gradient
                // resumes the random-walk cadence, it does not restart.
                (dx, dy)
            }
            None => {
                // Random walk on the smoothed heading.
                self.steps_since_heading_change += 1;
                if self.steps_since_heading_change >= params.heading_change_period {
                    let perturbation = standard_gaussian(rng) * params.heading_sigma_degrees;
                    self.heading_degrees = wrap_degrees(self.heading_degrees + perturbation);
                    self.steps_since_heading_change = 0;
                }
                let radians = self.heading_degrees.to_radians();
                (params.speed * radians.cos(), params.speed * radians.sin())
            }
        };

        // Independent per-axis reflection; both may fire in one tick
        // (corner). Heading mirrors with the displacement.
        let width = spec.world_width();
        let height = spec.world_height();
        let tentative_x = self.position.x + dx;
        if tentative_x < 0.0 || tentative_x > width {
            dx = -dx;
            self.heading_degrees = wrap_degrees(180.0 - self.heading_degrees);
        }
        let tentative_y = self.position.y + dy;
        if tentative_y < 0.0 || tentative_y > height {
            dy = -dy;
            self.heading_degrees = wrap_degrees(-self.heading_degrees);
        }

        self.position.x = (self.position.x + dx).clamp(0.0, width - 1.0);
        self.position.y = (self.position.y + dy).clamp(0.0, height - 1.0);

        pheromone.deposit_at(self.position);
    }
}

/// Wrap an angle into `[0, 360)`.
fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// One standard-normal sample via the Box-Muller transform.
///
/// Keeps the RNG surface to plain uniform draws instead of pulling in a
/// distributions crate.
fn standard_gaussian(rng: &mut ChaCha8Rng) -> f32 {
    let u1: f64 = rng.gen::<f64>().max(1e-300); // avoid ln(0)
    let u2: f64 = rng.gen();
    ((-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()) as f32
}
