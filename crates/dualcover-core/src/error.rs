//! Error types for instance construction and validation.

use thiserror::Error;

/// Structural inconsistency in an instance.
///
/// Raised by [`Instance::validate`](crate::Instance::validate) (and by the
/// solver before any algorithmic work) when the stored set family cannot
/// describe a well-formed covering problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// The element universe is empty; a cover over zero elements is
    /// not a meaningful problem.
    #[error("element universe must not be empty")]
    EmptyUniverse,

    /// The parallel `sets`/`costs` sequences have diverged in length.
    #[error("instance has {sets} sets but {costs} costs")]
    SetCostMismatch { sets: usize, costs: usize },

    /// A set references an element outside `[0, element_count)`.
    #[error("set {set} references element {element}, outside the universe of {element_count} elements")]
    ElementOutOfRange {
        set: usize,
        element: usize,
        element_count: usize,
    },
}
