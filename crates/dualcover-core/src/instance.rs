//! The weighted set-cover instance model.
//!
//! An [`Instance`] is an append-only container: the element universe is
//! fixed at construction, and weighted sets are added one at a time. The
//! insertion order of sets defines their indices, which the solver reports
//! in its result and which break ties during dual growth.

use num_traits::Float;

use crate::error::StructuralError;

/// A weighted set-cover instance over the universe `0..element_count`.
///
/// Sets are index-aligned with their costs; set `i` is the `i`-th call to
/// [`add_set`](Instance::add_set). The instance is never mutated by the
/// solver.
///
/// # Examples
///
/// ```
/// use dualcover_core::Instance;
///
/// let mut instance: Instance<f64> = Instance::new(3).unwrap();
/// instance.add_set(1.5, vec![0, 1]);
/// instance.add_set(2.0, vec![1, 2]);
///
/// assert_eq!(instance.set_count(), 2);
/// assert!(instance.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instance<C> {
    element_count: usize,
    sets: Vec<Vec<usize>>,
    costs: Vec<C>,
}

impl<C: Float> Instance<C> {
    /// Creates an empty instance over the universe `0..element_count`.
    ///
    /// # Errors
    ///
    /// Returns [`StructuralError::EmptyUniverse`] if `element_count` is zero.
    pub fn new(element_count: usize) -> Result<Self, StructuralError> {
        if element_count == 0 {
            return Err(StructuralError::EmptyUniverse);
        }
        Ok(Instance {
            element_count,
            sets: Vec::new(),
            costs: Vec::new(),
        })
    }

    /// Appends one weighted set; its index is the current set count.
    ///
    /// The cost is expected to be finite and non-negative, and every
    /// element to lie in `[0, element_count)`. Neither is checked here;
    /// [`validate`](Instance::validate) catches out-of-range elements
    /// before any solving happens. Duplicate elements within a set are
    /// tolerated and treated as a single membership.
    pub fn add_set(&mut self, cost: C, elements: Vec<usize>) {
        self.sets.push(elements);
        self.costs.push(cost);
    }

    /// Checks structural consistency of the stored set family.
    ///
    /// # Errors
    ///
    /// * [`StructuralError::SetCostMismatch`] if the `sets` and `costs`
    ///   sequences differ in length.
    /// * [`StructuralError::ElementOutOfRange`] if any set references an
    ///   element outside `[0, element_count)`.
    pub fn validate(&self) -> Result<(), StructuralError> {
        if self.sets.len() != self.costs.len() {
            return Err(StructuralError::SetCostMismatch {
                sets: self.sets.len(),
                costs: self.costs.len(),
            });
        }
        for (set, elements) in self.sets.iter().enumerate() {
            for &element in elements {
                if element >= self.element_count {
                    return Err(StructuralError::ElementOutOfRange {
                        set,
                        element,
                        element_count: self.element_count,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the size of the element universe.
    #[inline]
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Returns the number of sets added so far.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Returns the element list of set `i`.
    #[inline]
    pub fn set(&self, i: usize) -> &[usize] {
        &self.sets[i]
    }

    /// Returns the cost of set `i`.
    #[inline]
    pub fn cost(&self, i: usize) -> C {
        self.costs[i]
    }

    /// Returns all element lists, in insertion order.
    #[inline]
    pub fn sets(&self) -> &[Vec<usize>] {
        &self.sets
    }

    /// Returns all costs, index-aligned with [`sets`](Instance::sets).
    #[inline]
    pub fn costs(&self) -> &[C] {
        &self.costs
    }

    /// Returns the maximum set-membership frequency `f` over all elements.
    ///
    /// `f` bounds the approximation factor of the primal-dual solver: the
    /// returned cover costs at most `f` times the optimum. Duplicate
    /// listings of an element within one set count once; out-of-range
    /// elements are ignored (validation reports them).
    pub fn frequency(&self) -> usize {
        let mut membership = vec![0usize; self.element_count];
        for elements in &self.sets {
            let mut seen = vec![false; self.element_count];
            for &element in elements {
                if element < self.element_count && !seen[element] {
                    seen[element] = true;
                    membership[element] += 1;
                }
            }
        }
        membership.into_iter().max().unwrap_or(0)
    }

    /// Sums the costs of the given set indices.
    pub fn total_cost(&self, indices: &[usize]) -> C {
        indices
            .iter()
            .fold(C::zero(), |acc, &i| acc + self.costs[i])
    }

    /// Checks whether the given set indices cover the whole universe.
    pub fn is_cover(&self, indices: &[usize]) -> bool {
        let mut covered = vec![false; self.element_count];
        for &i in indices {
            for &element in &self.sets[i] {
                if element < self.element_count {
                    covered[element] = true;
                }
            }
        }
        covered.into_iter().all(|c| c)
    }
}
