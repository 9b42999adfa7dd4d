//! Seeded random instance generation.

use dualcover_core::Instance;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Returns a reproducible RNG for property tests.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generates a feasible instance with random sets and costs.
///
/// Each of the `set_count` sets draws a random size and random elements;
/// any element left uncovered afterwards is patched into a random set, so
/// the result is always feasible. Costs are uniform in `[0.1, 10.0)`.
pub fn random_feasible<R: Rng>(
    rng: &mut R,
    element_count: usize,
    set_count: usize,
) -> Instance<f64> {
    assert!(element_count > 0 && set_count > 0);

    let mut sets: Vec<Vec<usize>> = (0..set_count)
        .map(|_| {
            let size = rng.random_range(1..=element_count);
            (0..size).map(|_| rng.random_range(0..element_count)).collect()
        })
        .collect();

    let mut covered = vec![false; element_count];
    for elements in &sets {
        for &element in elements {
            covered[element] = true;
        }
    }
    for (element, covered) in covered.into_iter().enumerate() {
        if !covered {
            let set = rng.random_range(0..set_count);
            sets[set].push(element);
        }
    }

    let mut instance = Instance::new(element_count).expect("positive universe");
    for elements in sets {
        instance.add_set(rng.random_range(0.1..10.0), elements);
    }
    instance
}
