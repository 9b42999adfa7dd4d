//! Weighted Vertex Cover Demo
//!
//! Vertex Cover is Set Cover where the edges are the elements and each
//! vertex is a set containing its incident edges; every edge lies in
//! exactly two such sets, so the primal-dual solver guarantees a
//! 2-approximation.
//!
//! Run with `RUST_LOG=dualcover_solver=trace` to watch the dual growth.

use std::process::ExitCode;

use dualcover::prelude::*;
use tracing_subscriber::EnvFilter;

/// Builds the five-element reference instance.
fn reference_instance() -> Instance<f64> {
    let mut instance = Instance::new(5).expect("positive universe");
    instance.add_set(50.0, vec![0, 1]);
    instance.add_set(2.0, vec![1, 2, 3]);
    instance.add_set(3.0, vec![3, 4]);
    instance.add_set(2.0, vec![4, 0]);
    instance
}

/// Builds a weighted vertex cover over a small graph.
///
/// Graph: 0-1, 0-2, 1-2, 2-3 with vertex weights 3, 2, 4, 1. Edges are
/// numbered in that order and form the element universe.
fn vertex_cover_instance() -> Instance<f64> {
    let weights = [3.0, 2.0, 4.0, 1.0];
    let edges = [(0usize, 1usize), (0, 2), (1, 2), (2, 3)];

    let mut incident = vec![Vec::new(); weights.len()];
    for (edge, &(u, v)) in edges.iter().enumerate() {
        incident[u].push(edge);
        incident[v].push(edge);
    }

    let mut instance = Instance::new(edges.len()).expect("non-empty edge list");
    for (vertex, edges_at) in incident.into_iter().enumerate() {
        instance.add_set(weights[vertex], edges_at);
    }
    instance
}

fn run(name: &str, instance: &Instance<f64>) -> Result<(), SolveError> {
    let cover = solve(instance)?;

    let names: Vec<String> = cover.iter().map(|s| format!("S_{s}")).collect();
    println!(
        "{name}: using sets {} (total cost {})",
        names.join(" "),
        instance.total_cost(&cover)
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runs = [
        ("set cover", reference_instance()),
        ("vertex cover", vertex_cover_instance()),
    ];

    for (name, instance) in &runs {
        if let Err(error) = run(name, instance) {
            eprintln!("{name}: {error}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
