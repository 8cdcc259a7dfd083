//! Bounded per-cell intensity storage.

use crate::grid::GridSpec;
use formic_core::Cell;

/// A decaying 2D grid of intensities in `[0, 1]`.
///
/// Storage is a flat row-major `Vec<f32>` over the cells of a
/// [`GridSpec`]. Every operation maintains the clamping invariant:
/// after any write, every cell value lies in `[0, 1]`.
///
/// Out-of-range cells are part of the contract, not an error: writes to
/// them are silent no-ops and reads return `0.0`, so callers never
/// special-case boundaries.
#[derive(Clone, Debug)]
pub struct ScalarField {
    spec: GridSpec,
    values: Vec<f32>,
}

impl ScalarField {
    /// Create an all-zero field over the given grid.
    pub fn new(spec: GridSpec) -> Self {
        Self {
            spec,
            values: vec![0.0; spec.cell_count()],
        }
    }

    /// The grid geometry this field is stored over.
    pub fn spec(&self) -> &GridSpec {
        &self.spec
    }

    /// Multiply every cell by `factor`, then clamp.
    ///
    /// With a factor close to 1 (e.g. 0.995) this produces exponential
    /// fading: active regions thin out gradually and inactive regions
    /// approach zero asymptotically without ever hitting a hard floor.
    pub fn decay_multiplicative(&mut self, factor: f32) {
        for v in &mut self.values {
            *v = (*v * factor).clamp(0.0, 1.0);
        }
    }

    /// Subtract `amount` from every cell, flooring at zero.
    ///
    /// Linear fading: a cell at intensity `i` reaches exactly zero after
    /// `ceil(i / amount)` ticks, giving the field a bounded lifetime.
    pub fn decay_subtractive(&mut self, amount: f32) {
        for v in &mut self.values {
            *v = (*v - amount).clamp(0.0, 1.0);
        }
    }

    /// Saturating deposit: `v = min(1, v + amount)`.
    ///
    /// Out-of-range cells are ignored.
    pub fn deposit_max(&mut self, cell: Cell, amount: f32) {
        if let Some(idx) = self.spec.index(cell) {
            self.values[idx] = (self.values[idx] + amount).min(1.0);
        }
    }

    /// Superposition write: `v = max(v, min(1, value))`.
    ///
    /// Overlapping writers plateau at the stronger signal instead of
    /// summing. Out-of-range cells are ignored.
    pub fn set_max(&mut self, cell: Cell, value: f32) {
        if let Some(idx) = self.spec.index(cell) {
            self.values[idx] = self.values[idx].max(value.min(1.0));
        }
    }

    /// Read one cell; `0.0` for out-of-range cells.
    pub fn sample(&self, cell: Cell) -> f32 {
        match self.spec.index(cell) {
            Some(idx) => self.values[idx],
            None => 0.0,
        }
    }

    /// The raw row-major values, `rows × cols` long.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Reset every cell to zero.
    pub fn clear(&mut self) {
        self.values.fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_field() -> ScalarField {
        ScalarField::new(GridSpec::new(40.0, 30.0, 10.0).unwrap())
    }

    #[test]
    fn new_field_is_all_zero() {
        let f = small_field();
        assert_eq!(f.values().len(), 12);
        assert!(f.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn deposit_saturates_at_one() {
        let mut f = small_field();
        let c = Cell::new(1, 1);
        f.deposit_max(c, 0.7);
        assert_eq!(f.sample(c), 0.7);
        f.deposit_max(c, 0.7);
        assert_eq!(f.sample(c), 1.0);
    }

    #[test]
    fn set_max_takes_stronger_signal_only() {
        let mut f = small_field();
        let c = Cell::new(2, 0);
        f.set_max(c, 0.6);
        f.set_max(c, 0.4);
        assert_eq!(f.sample(c), 0.6);
        f.set_max(c, 0.9);
        assert_eq!(f.sample(c), 0.9);
    }

    #[test]
    fn set_max_clamps_incoming_value() {
        let mut f = small_field();
        let c = Cell::new(0, 0);
        f.set_max(c, 3.5);
        assert_eq!(f.sample(c), 1.0);
    }

    #[test]
    fn overlapping_set_max_never_sums() {
        // Two writers at 0.6 each must leave exactly 0.6, not 1.0.
        let mut f = small_field();
        let c = Cell::new(1, 2);
        f.set_max(c, 0.6);
        f.set_max(c, 0.6);
        assert_eq!(f.sample(c), 0.6);
    }

    #[test]
    fn out_of_range_writes_are_noops() {
        let mut f = small_field();
        f.deposit_max(Cell::new(-1, 0), 0.5);
        f.deposit_max(Cell::new(4, 0), 0.5);
        f.set_max(Cell::new(0, 3), 0.5);
        assert!(f.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn out_of_range_reads_are_zero() {
        let f = small_field();
        assert_eq!(f.sample(Cell::new(-1, -1)), 0.0);
        assert_eq!(f.sample(Cell::new(100, 0)), 0.0);
    }

    #[test]
    fn multiplicative_decay_scales_values() {
        let mut f = small_field();
        let c = Cell::new(0, 1);
        f.deposit_max(c, 0.8);
        f.decay_multiplicative(0.5);
        assert_eq!(f.sample(c), 0.4);
    }

    #[test]
    fn subtractive_decay_floors_at_zero() {
        let mut f = small_field();
        let c = Cell::new(3, 2);
        f.deposit_max(c, 0.01);
        f.decay_subtractive(0.005);
        assert!((f.sample(c) - 0.005).abs() < 1e-6);
        f.decay_subtractive(0.005);
        assert_eq!(f.sample(c), 0.0);
        f.decay_subtractive(0.005);
        assert_eq!(f.sample(c), 0.0);
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut f = small_field();
        f.deposit_max(Cell::new(1, 1), 1.0);
        f.clear();
        assert!(f.values().iter().all(|&v| v == 0.0));
    }

    // ── Property suite ───────────────────────────────────────

    /// One arbitrary field operation.
    #[derive(Clone, Debug)]
    enum Op {
        DecayMul(f32),
        DecaySub(f32),
        Deposit(i32, i32, f32),
        SetMax(i32, i32, f32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0.0f32..=1.0).prop_map(Op::DecayMul),
            (0.0f32..=0.2).prop_map(Op::DecaySub),
            (-2i32..6, -2i32..5, 0.0f32..=2.0).prop_map(|(c, r, a)| Op::Deposit(c, r, a)),
            (-2i32..6, -2i32..5, 0.0f32..=2.0).prop_map(|(c, r, v)| Op::SetMax(c, r, v)),
        ]
    }

    proptest! {
        /// Every cell stays in [0, 1] under arbitrary op sequences.
        #[test]
        fn clamping_invariant_holds(ops in prop::collection::vec(arb_op(), 0..64)) {
            let mut f = small_field();
            for op in ops {
                match op {
                    Op::DecayMul(factor) => f.decay_multiplicative(factor),
                    Op::DecaySub(amount) => f.decay_subtractive(amount),
                    Op::Deposit(c, r, a) => f.deposit_max(Cell::new(c, r), a),
                    Op::SetMax(c, r, v) => f.set_max(Cell::new(c, r), v),
                }
                for &v in f.values() {
                    prop_assert!((0.0..=1.0).contains(&v), "cell escaped [0,1]: {v}");
                }
            }
        }

        /// With no deposits, both decay laws are non-increasing everywhere.
        #[test]
        fn decay_is_monotone(
            seeds in prop::collection::vec(0.0f32..=1.0, 12),
            factor in 0.0f32..=1.0,
            amount in 0.0f32..=0.1,
            ticks in 1usize..50,
        ) {
            let mut mul = small_field();
            let mut sub = small_field();
            for (i, &s) in seeds.iter().enumerate() {
                let cell = Cell::new((i % 4) as i32, (i / 4) as i32);
                mul.set_max(cell, s);
                sub.set_max(cell, s);
            }
            for _ in 0..ticks {
                let before_mul = mul.values().to_vec();
                let before_sub = sub.values().to_vec();
                mul.decay_multiplicative(factor);
                sub.decay_subtractive(amount);
                for (b, a) in before_mul.iter().zip(mul.values()) {
                    prop_assert!(a <= b);
                }
                for (b, a) in before_sub.iter().zip(sub.values()) {
                    prop_assert!(a <= b);
                }
            }
        }

        /// Subtractive decay reaches exactly zero in bounded ticks.
        #[test]
        fn subtractive_decay_terminates(start in 0.0f32..=1.0) {
            let mut f = small_field();
            let c = Cell::new(0, 0);
            f.set_max(c, start);
            // 0.005 per tick clears any unit intensity within 200 ticks.
            for _ in 0..200 {
                f.decay_subtractive(0.005);
            }
            prop_assert_eq!(f.sample(c), 0.0);
        }
    }
}
