//! Dualcover Solver - primal-dual approximation for weighted set cover
//!
//! This crate provides the algorithmic side of dualcover:
//! - [`solve`] / [`solve_with_tolerance`] - the stateless solver entry points
//! - [`DualState`] - per-set dual constraint bookkeeping
//! - [`SolveError`] - structural and infeasibility failures

pub mod dual;
pub mod error;
pub mod solver;


pub use dual::DualState;
pub use error::SolveError;
pub use solver::{solve, solve_with_tolerance, DEFAULT_TOLERANCE};
