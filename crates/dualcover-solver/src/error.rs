//! Solver error types.

use dualcover_core::StructuralError;
use thiserror::Error;

/// Failure of a `solve` call. No partial cover accompanies either variant.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The instance failed validation; no algorithmic work was performed.
    #[error(transparent)]
    Structural(#[from] StructuralError),

    /// Some element is contained in no set, so no cover exists. The dual
    /// for this element could grow without bound, which certifies primal
    /// infeasibility.
    #[error("element {element} is not contained in any set; the instance is infeasible")]
    Infeasible { element: usize },
}
