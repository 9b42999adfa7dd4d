//! Dualcover Core - instance model for the primal-dual set-cover solver
//!
//! This crate provides the data side of the solver:
//! - [`Instance`] - the weighted set family over a fixed element universe
//! - [`CoverageIndex`] - per-element lookup of covering sets
//! - [`StructuralError`] - validation failures

pub mod coverage;
pub mod error;
pub mod instance;

#[cfg(test)]
mod instance_tests;

pub use coverage::CoverageIndex;
pub use error::StructuralError;
pub use instance::Instance;
