//! Exhaustive reference search for the optimal cover.

use dualcover_core::Instance;
use num_traits::Float;

/// Largest set count accepted by [`optimal_cover`].
const MAX_BRUTE_SETS: usize = 20;

/// Finds a minimum-cost cover by enumerating every subfamily.
///
/// Returns `None` when no subfamily covers the universe (the instance is
/// infeasible). Intended for approximation-bound tests on small instances
/// only.
///
/// # Panics
///
/// Panics if the instance has more than 20 sets; the enumeration is
/// exponential in the set count.
pub fn optimal_cover<C: Float>(instance: &Instance<C>) -> Option<(Vec<usize>, C)> {
    let set_count = instance.set_count();
    assert!(
        set_count <= MAX_BRUTE_SETS,
        "brute-force search is exponential; got {set_count} sets"
    );

    let mut best: Option<(Vec<usize>, C)> = None;
    for mask in 0u32..(1u32 << set_count) {
        let indices: Vec<usize> = (0..set_count).filter(|i| mask & (1 << i) != 0).collect();
        if !instance.is_cover(&indices) {
            continue;
        }
        let cost = instance.total_cost(&indices);
        if best.as_ref().map_or(true, |(_, b)| cost < *b) {
            best = Some((indices, cost));
        }
    }
    best
}
