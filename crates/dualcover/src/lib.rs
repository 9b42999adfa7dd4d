//! dualcover - approximate weighted Set Cover via the primal-dual schema
//!
//! Build an [`Instance`], add weighted sets, and call [`solve`]. The
//! returned cover costs at most `f` times the optimum, where `f` is the
//! maximum number of sets any single element belongs to (Weighted Vertex
//! Cover, with `f = 2`, is the classic special case).
//!
//! # Example
//!
//! ```
//! use dualcover::prelude::*;
//!
//! let mut instance = Instance::new(5).unwrap();
//! instance.add_set(50.0, vec![0, 1]);
//! instance.add_set(2.0, vec![1, 2, 3]);
//! instance.add_set(3.0, vec![3, 4]);
//! instance.add_set(2.0, vec![4, 0]);
//!
//! let cover = solve(&instance).unwrap();
//! assert_eq!(cover, vec![1, 3]);
//! ```

// Data model
pub use dualcover_core::{CoverageIndex, Instance, StructuralError};

// Solver
pub use dualcover_solver::{solve, solve_with_tolerance, DualState, SolveError, DEFAULT_TOLERANCE};

/// The commonly needed subset of the API.
pub mod prelude {
    pub use dualcover_core::{Instance, StructuralError};
    pub use dualcover_solver::{solve, SolveError};
}
