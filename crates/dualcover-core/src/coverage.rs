//! Per-element coverage index.
//!
//! The dual-growth loop repeatedly asks "which sets contain element e".
//! Instead of materializing the dense element × set incidence matrix, this
//! index stores, per element, the ascending list of set indices containing
//! it. Memory is proportional to the total membership count rather than
//! `element_count * set_count`.

use num_traits::Float;

use crate::instance::Instance;

/// Adjacency-list view of an instance: element index to covering sets.
///
/// Built fresh per solve call from a validated [`Instance`]; never
/// persisted.
#[derive(Debug, Clone)]
pub struct CoverageIndex {
    covering: Vec<Vec<usize>>,
}

impl CoverageIndex {
    /// Builds the index from an instance.
    ///
    /// Set indices appear ascending in each element's list. Duplicate
    /// listings of an element within one set collapse to a single entry.
    /// Out-of-range elements are skipped; callers are expected to have run
    /// [`Instance::validate`] first.
    pub fn build<C: Float>(instance: &Instance<C>) -> Self {
        let mut covering = vec![Vec::new(); instance.element_count()];
        for (set, elements) in instance.sets().iter().enumerate() {
            for &element in elements {
                if element >= instance.element_count() {
                    continue;
                }
                // Pushes for one set are contiguous, so a duplicate within
                // the set is always the current last entry.
                if covering[element].last() != Some(&set) {
                    covering[element].push(set);
                }
            }
        }
        CoverageIndex { covering }
    }

    /// Returns the ascending set indices containing `element`.
    #[inline]
    pub fn covering(&self, element: usize) -> &[usize] {
        &self.covering[element]
    }

    /// Returns the number of elements indexed.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.covering.len()
    }

    /// Returns the maximum covering-list length over all elements.
    pub fn max_frequency(&self) -> usize {
        self.covering.iter().map(Vec::len).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Instance<f64> {
        let mut instance = Instance::new(4).unwrap();
        instance.add_set(1.0, vec![0, 1]);
        instance.add_set(2.0, vec![1, 2, 3]);
        instance.add_set(3.0, vec![3]);
        instance
    }

    #[test]
    fn test_covering_lists_are_ascending() {
        let index = CoverageIndex::build(&sample());
        assert_eq!(index.covering(0), &[0]);
        assert_eq!(index.covering(1), &[0, 1]);
        assert_eq!(index.covering(2), &[1]);
        assert_eq!(index.covering(3), &[1, 2]);
    }

    #[test]
    fn test_duplicates_within_set_collapse() {
        let mut instance: Instance<f64> = Instance::new(2).unwrap();
        instance.add_set(1.0, vec![0, 0, 1, 0]);
        let index = CoverageIndex::build(&instance);
        assert_eq!(index.covering(0), &[0]);
        assert_eq!(index.covering(1), &[0]);
    }

    #[test]
    fn test_uncovered_element_has_empty_list() {
        let mut instance: Instance<f64> = Instance::new(3).unwrap();
        instance.add_set(1.0, vec![0]);
        let index = CoverageIndex::build(&instance);
        assert!(index.covering(1).is_empty());
        assert!(index.covering(2).is_empty());
    }

    #[test]
    fn test_max_frequency() {
        let index = CoverageIndex::build(&sample());
        assert_eq!(index.max_frequency(), 2);
        assert_eq!(index.element_count(), 4);
    }
}
