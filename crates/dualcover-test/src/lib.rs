//! Shared test fixtures for dualcover crates.
//!
//! This crate provides instances and pure reference computations for
//! testing. It depends only on `dualcover-core` so that solver crates can
//! use it as a dev-dependency without a cycle.
//!
//! - [`fixtures`] - hand-built instances (worked example, vertex-cover reduction)
//! - [`brute`] - exhaustive optimal-cover search for small instances
//! - [`random`] - seeded random feasible-instance generation
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! dualcover-test = { workspace = true }
//! ```

pub mod brute;
pub mod fixtures;
pub mod random;

pub use brute::optimal_cover;
pub use fixtures::{vertex_cover, worked_example};
pub use random::random_feasible;
