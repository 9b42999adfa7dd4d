//! Primal-dual dual-growth solver for weighted set cover.
//!
//! Elements are processed in ascending index order; each element's dual
//! variable is raised as far as the tightest covering set allows, and the
//! sets whose constraints end up tight form the cover. The cover costs at
//! most `f` times the optimum, where `f` is the maximum number of sets any
//! single element belongs to.
//!
//! The processing order is part of the contract: a different order can
//! produce a different, still valid, cover, so reordering would silently
//! change observable results.

use dualcover_core::{CoverageIndex, Instance};
use num_traits::Float;
use tracing::{debug, trace};

use crate::dual::DualState;
use crate::error::SolveError;

/// Tightness tolerance used by [`solve`].
///
/// Dual slacks drift away from exact cost equality under floating-point
/// arithmetic; a constraint counts as tight when the residual is below
/// this value. A numerical-stability constant, not a domain parameter.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// Computes an approximate minimum-cost set cover.
///
/// Returns the ascending indices of the selected sets. The result covers
/// every element whenever the instance is feasible and costs at most
/// `instance.frequency()` times the optimal cover. The returned cover may
/// contain redundant tight sets; no minimality pass is performed.
///
/// # Errors
///
/// * [`SolveError::Structural`] if the instance fails validation; no
///   algorithmic work happens in that case.
/// * [`SolveError::Infeasible`] if some element belongs to no set,
///   naming the lowest-indexed such element.
///
/// # Examples
///
/// ```
/// use dualcover_core::Instance;
/// use dualcover_solver::solve;
///
/// let mut instance = Instance::new(5).unwrap();
/// instance.add_set(50.0, vec![0, 1]);
/// instance.add_set(2.0, vec![1, 2, 3]);
/// instance.add_set(3.0, vec![3, 4]);
/// instance.add_set(2.0, vec![4, 0]);
///
/// assert_eq!(solve(&instance).unwrap(), vec![1, 3]);
/// ```
pub fn solve<C: Float>(instance: &Instance<C>) -> Result<Vec<usize>, SolveError> {
    let tolerance = C::from(DEFAULT_TOLERANCE).unwrap_or_else(C::epsilon);
    solve_with_tolerance(instance, tolerance)
}

/// [`solve`] with an explicit tightness tolerance.
///
/// Exists as a tuning knob for numerically adversarial instances (costs
/// separated by less than [`DEFAULT_TOLERANCE`]); ordinary callers should
/// use [`solve`].
pub fn solve_with_tolerance<C: Float>(
    instance: &Instance<C>,
    tolerance: C,
) -> Result<Vec<usize>, SolveError> {
    instance.validate()?;

    let index = CoverageIndex::build(instance);
    let mut dual = DualState::new(instance.set_count());

    debug!(
        event = "solve_start",
        elements = instance.element_count(),
        sets = instance.set_count(),
    );

    // Ascending element order, a fixed part of the contract.
    for element in 0..instance.element_count() {
        let covering = index.covering(element);
        if covering.is_empty() {
            debug!(event = "infeasible", element);
            return Err(SolveError::Infeasible { element });
        }

        // The dual variable y_element can grow until the first covering
        // constraint becomes tight.
        let mut increment = C::infinity();
        for &set in covering {
            let gap = dual.gap(set, instance.cost(set));
            if gap < increment {
                increment = gap;
            }
        }

        for &set in covering {
            dual.raise(set, increment);
        }

        trace!(
            event = "dual_raised",
            element,
            covering = covering.len(),
            increment = increment.to_f64().unwrap_or(f64::NAN),
        );
    }

    let cover: Vec<usize> = (0..instance.set_count())
        .filter(|&set| dual.is_tight(set, instance.cost(set), tolerance))
        .collect();

    debug!(event = "solve_end", selected = cover.len());
    Ok(cover)
}
