//! The food-smell field and its point sources.

use formic_core::{Point, SourceId};
use formic_grid::{GridSpec, ScalarField};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Tunables for the smell field and its sources.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmellParams {
    /// Subtractive per-tick decay amount, `>= 0`.
    pub decay_amount: f32,
    /// Emission strength; a cell at world-unit distance `d` from a
    /// source receives `min(1, strength / d²)`.
    pub emission_strength: f32,
    /// Emission radius in world units, `> 0`.
    pub emission_radius: f32,
    /// Ticks between footprint recomputations for one source, `>= 1`.
    pub refresh_period: u32,
    /// Removal queries only match a source within this distance.
    pub removal_tolerance: f32,
}

impl Default for SmellParams {
    fn default() -> Self {
        Self {
            decay_amount: 0.005,
            emission_strength: 80.0,
            emission_radius: 30.0,
            refresh_period: 4,
            removal_tolerance: 10.0,
        }
    }
}

/// A point emitter owned by the smell field.
///
/// The countdown stays in `[0, refresh_period)`; a source stamps its
/// footprint on the tick its countdown reads zero and then starts over
/// at `refresh_period - 1`. New sources start at `refresh_period - 1`,
/// so creation time staggers the refresh schedule across sources.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoodSource {
    id: SourceId,
    position: Point,
    cycles_until_refresh: u32,
}

impl FoodSource {
    /// Stable identifier assigned at creation.
    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Where the source sits, in world units.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// The decaying field food sources emit into and agents sense.
///
/// Decay is subtractive so the field fades to exactly zero in a bounded
/// number of ticks: a source's reach is finite in time as well as
/// space. Emission uses `set_max` superposition: overlapping sources
/// plateau at the stronger signal rather than summing, so clustered
/// sources cannot blow the field up.
#[derive(Clone, Debug)]
pub struct FoodSmellField {
    field: ScalarField,
    sources: IndexMap<SourceId, FoodSource>,
    next_source: u64,
    params: SmellParams,
}

impl FoodSmellField {
    /// Create an all-zero smell field with no sources.
    ///
    /// `params` must already be validated (see the engine crate's world
    /// configuration).
    pub fn new(spec: GridSpec, params: SmellParams) -> Self {
        Self {
            field: ScalarField::new(spec),
            sources: IndexMap::new(),
            next_source: 0,
            params,
        }
    }

    /// Apply one tick of subtractive decay.
    pub fn decay_tick(&mut self) {
        self.field.decay_subtractive(self.params.decay_amount);
    }

    /// Advance every source's refresh countdown, stamping the footprint
    /// of each source that comes due. Returns how many stamped.
    ///
    /// Only due sources pay the footprint cost, so one tick costs
    /// O(due_sources × footprint_area), not O(all_sources × footprint).
    pub fn refresh_sources(&mut self) -> u32 {
        // Collect due positions first: stamping needs the field mutably
        // while the source list is being walked.
        let mut due: SmallVec<[Point; 8]> = SmallVec::new();
        let period = self.params.refresh_period;
        for source in self.sources.values_mut() {
            if source.cycles_until_refresh == 0 {
                due.push(source.position);
                source.cycles_until_refresh = period - 1;
            } else {
                source.cycles_until_refresh -= 1;
            }
        }
        for &position in &due {
            stamp_footprint(
                &mut self.field,
                position,
                self.params.emission_strength,
                self.params.emission_radius,
            );
        }
        due.len() as u32
    }

    /// Create a source at `at`. Its first stamp happens once its
    /// countdown first reads zero, `refresh_period` ticks from now.
    pub fn add_source(&mut self, at: Point) -> SourceId {
        let id = SourceId(self.next_source);
        self.next_source += 1;
        self.sources.insert(
            id,
            FoodSource {
                id,
                position: at,
                cycles_until_refresh: self.params.refresh_period - 1,
            },
        );
        id
    }

    /// Remove the source closest to `at`, if it lies within the removal
    /// tolerance. Returns the removed id, or `None` for the no-op case.
    pub fn remove_closest_source(&mut self, at: Point) -> Option<SourceId> {
        let tolerance_sq = self.params.removal_tolerance * self.params.removal_tolerance;
        // Strict comparison keeps the first-created source on ties.
        let mut closest: Option<(SourceId, f32)> = None;
        for source in self.sources.values() {
            let d2 = source.position.distance_squared(at);
            if closest.map_or(true, |(_, best)| d2 < best) {
                closest = Some((source.id, d2));
            }
        }
        let (id, d2) = closest?;
        if d2 <= tolerance_sq {
            self.sources.shift_remove(&id);
            Some(id)
        } else {
            None
        }
    }

    /// The sources in creation order.
    pub fn sources(&self) -> impl Iterator<Item = &FoodSource> + '_ {
        self.sources.values()
    }

    /// Number of live sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Read-only access to the underlying intensities.
    pub fn field(&self) -> &ScalarField {
        &self.field
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut ScalarField {
        &mut self.field
    }
}

/// Stamp one source's emission footprint into the field.
///
/// Walks every cell offset within the emission radius, measured
/// center-to-center in world units with a squared-Euclidean cutoff
/// (`Δcol² + Δrow²` scaled by `cell_size²`, compared against
/// `radius²`). Each covered cell receives `min(1, strength / d²)` via
/// `set_max`. The zero offset is skipped: the source's own cell has
/// distance zero and is only reached by neighbouring sources or prior
/// field state.
fn stamp_footprint(field: &mut ScalarField, at: Point, strength: f32, radius: f32) {
    let spec = *field.spec();
    let origin = spec.cell_of(at);
    let cell = spec.cell_size();
    let reach = (radius / cell).ceil() as i32;
    let radius_sq = radius * radius;
    for drow in -reach..=reach {
        for dcol in -reach..=reach {
            if dcol == 0 && drow == 0 {
                continue;
            }
            let d2 = ((dcol * dcol + drow * drow) as f32) * cell * cell;
            if d2 > radius_sq {
                continue;
            }
            let intensity = (strength / d2).min(1.0);
            field.set_max(origin.offset(dcol, drow), intensity);
        }
    }
}
