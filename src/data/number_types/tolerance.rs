//! # Tolerances
//!
//! Thresholds that decide when two floats are "the same" for the purposes of the solver.
use crate::data::number_types::traits::Quantity;

/// Default value of `Tolerance::balance`.
pub const DEFAULT_BALANCE_TOLERANCE: f64 = 1e-6;
/// Default value of `Tolerance::zero`.
pub const DEFAULT_ZERO_TOLERANCE: f64 = 1e-9;

/// Numerical thresholds used throughout the solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance<F> {
    /// Largest accepted difference between total supply and total demand.
    ///
    /// Relative to the larger of the two totals once that exceeds one, absolute below that.
    pub balance: F,
    /// Values at most this far from zero are treated as zero.
    ///
    /// This decides optimality (reduced costs down to `-zero` are accepted), basis membership when
    /// the basis is derived from the positive support of an allocation, and which pivot residues
    /// are cleaned up to an exact zero.
    pub zero: F,
}

impl<F: Quantity> Default for Tolerance<F> {
    fn default() -> Self {
        Self {
            balance: F::from_literal(DEFAULT_BALANCE_TOLERANCE),
            zero: F::from_literal(DEFAULT_ZERO_TOLERANCE),
        }
    }
}

impl<F: Quantity> Tolerance<F> {
    /// Create a new `Tolerance`.
    ///
    /// # Arguments
    ///
    /// * `balance`: Accepted (relative) difference between supply and demand totals.
    /// * `zero`: Threshold below which absolute values are considered zero.
    pub fn new(balance: F, zero: F) -> Self {
        debug_assert!(balance >= F::zero());
        debug_assert!(zero >= F::zero());

        Self { balance, zero }
    }

    /// Whether a value is indistinguishable from zero.
    pub fn is_zero(&self, value: F) -> bool {
        value.abs() <= self.zero
    }

    /// Whether a value is positive by more than the zero threshold.
    pub fn is_positive(&self, value: F) -> bool {
        value > self.zero
    }

    /// Whether a value is negative by more than the zero threshold.
    pub fn is_negative(&self, value: F) -> bool {
        value < -self.zero
    }

    /// Replace a value that is indistinguishable from zero by an exact zero.
    pub fn clean(&self, value: F) -> F {
        if self.is_zero(value) {
            F::zero()
        } else {
            value
        }
    }

    /// Whether two totals match closely enough to call a problem balanced.
    ///
    /// # Arguments
    ///
    /// * `left`, `right`: The totals to compare, typically total supply and total demand.
    ///
    /// # Return value
    ///
    /// `true` if `|left - right| <= balance * max(1, |left|, |right|)`.
    pub fn are_balanced(&self, left: F, right: F) -> bool {
        let scale = left.abs().max(right.abs()).max(F::one());
        (left - right).abs() <= self.balance * scale
    }
}

#[cfg(test)]
mod test {
    use crate::data::number_types::tolerance::Tolerance;

    #[test]
    fn zero_threshold() {
        let tolerance = Tolerance::<f64>::default();

        assert!(tolerance.is_zero(0f64));
        assert!(tolerance.is_zero(-1e-12));
        assert!(!tolerance.is_zero(1e-3));
        assert!(tolerance.is_positive(1e-3));
        assert!(!tolerance.is_positive(1e-12));
        assert!(tolerance.is_negative(-1e-3));
        assert!(!tolerance.is_negative(-1e-12));

        assert_eq!(tolerance.clean(3e-12), 0f64);
        assert_eq!(tolerance.clean(-3e-12), 0f64);
        assert_eq!(tolerance.clean(2.5), 2.5);
    }

    #[test]
    fn balance() {
        let tolerance = Tolerance::new(1e-6, 1e-9);

        assert!(tolerance.are_balanced(50f64, 50f64));
        assert!(tolerance.are_balanced(0.1 + 0.2, 0.3));
        assert!(!tolerance.are_balanced(50f64, 50.1));
        // Relative for large totals
        assert!(tolerance.are_balanced(1e9, 1e9 + 1.));
        assert!(!tolerance.are_balanced(1e9, 1e9 + 1e4));
        // Absolute for small totals
        assert!(!tolerance.are_balanced(0f64, 1e-3));
    }
}
