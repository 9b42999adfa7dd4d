//! Hand-built instances used across the workspace tests.

use dualcover_core::Instance;

/// The five-element reference instance.
///
/// Four sets: S0 (cost 50, {0,1}), S1 (cost 2, {1,2,3}), S2 (cost 3,
/// {3,4}), S3 (cost 2, {4,0}). Dual growth in ascending element order
/// selects exactly S1 and S3 for a total cost of 4.
pub fn worked_example() -> Instance<f64> {
    let mut instance = Instance::new(5).expect("positive universe");
    instance.add_set(50.0, vec![0, 1]);
    instance.add_set(2.0, vec![1, 2, 3]);
    instance.add_set(3.0, vec![3, 4]);
    instance.add_set(2.0, vec![4, 0]);
    instance
}

/// Builds the set-cover reduction of weighted Vertex Cover.
///
/// Edges are the elements; each vertex becomes a set containing the
/// indices of its incident edges, weighted by `weights[vertex]`. Every
/// edge touches exactly two vertices, so the instance frequency is 2 and
/// the primal-dual solver yields a 2-approximation.
///
/// # Panics
///
/// Panics if `edges` is empty, `weights.len() != vertex_count`, or an
/// edge endpoint is out of range.
pub fn vertex_cover(vertex_count: usize, weights: &[f64], edges: &[(usize, usize)]) -> Instance<f64> {
    assert!(!edges.is_empty(), "vertex cover needs at least one edge");
    assert_eq!(weights.len(), vertex_count, "one weight per vertex");

    let mut incident = vec![Vec::new(); vertex_count];
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
