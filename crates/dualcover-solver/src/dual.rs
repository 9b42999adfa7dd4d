//! Dual-constraint bookkeeping.

use num_traits::Float;

/// Accumulated dual contribution per set.
///
/// For each set the dual LP carries the constraint
/// `sum of y_e over elements e in the set <= cost`. `slack_used[i]` is the
/// left-hand side so far; it starts at zero and only ever grows. A set
/// whose slack reaches its cost is *tight* and joins the cover.
#[derive(Debug, Clone)]
pub struct DualState<C> {
    slack_used: Vec<C>,
}

impl<C: Float> DualState<C> {
    /// Creates the all-zero dual state for `set_count` sets.
    pub fn new(set_count: usize) -> Self {
        DualState {
            slack_used: vec![C::zero(); set_count],
        }
    }

    /// Returns the remaining headroom of set `set` with the given cost.
    #[inline]
    pub fn gap(&self, set: usize, cost: C) -> C {
        cost - self.slack_used[set]
    }

    /// Adds `amount` to the accumulated contribution of set `set`.
    #[inline]
    pub fn raise(&mut self, set: usize, amount: C) {
        self.slack_used[set] = self.slack_used[set] + amount;
    }

    /// Checks whether the constraint of set `set` is tight within `tolerance`.
    #[inline]
    pub fn is_tight(&self, set: usize, cost: C, tolerance: C) -> bool {
        (cost - self.slack_used[set]).abs() < tolerance
    }

    /// Returns the accumulated contribution of set `set`.
    #[inline]
    pub fn slack_used(&self, set: usize) -> C {
        self.slack_used[set]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let dual: DualState<f64> = DualState::new(3);
        assert_eq!(dual.slack_used(0), 0.0);
        assert_eq!(dual.gap(2, 5.0), 5.0);
    }

    #[test]
    fn test_raise_accumulates() {
        let mut dual: DualState<f64> = DualState::new(2);
        dual.raise(1, 2.0);
        dual.raise(1, 0.5);
        assert_eq!(dual.slack_used(1), 2.5);
        assert_eq!(dual.gap(1, 4.0), 1.5);
    }

    #[test]
    fn test_tightness_uses_tolerance() {
        let mut dual: DualState<f64> = DualState::new(1);
        dual.raise(0, 3.0);
        assert!(dual.is_tight(0, 3.0, 1e-4));
        assert!(dual.is_tight(0, 3.00005, 1e-4));
        assert!(!dual.is_tight(0, 3.1, 1e-4));
    }
}
