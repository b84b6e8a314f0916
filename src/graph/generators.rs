use crate::graph::{DirectedGraph, Vertex};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

/// Generates a random directed graph on vertices `0..n` with roughly
/// `edge_factor * n` edges whose weights are drawn from `weights`.
///
/// The same seed always yields the same graph. Self-loops are skipped.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    weights: RangeInclusive<i64>,
    seed: u64,
) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertices(n);
    if n < 2 {
        return graph;
    }
    let mut rng = StdRng::seed_from_u64(seed);

    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = rng.gen_range(weights.clone());
            graph.insert_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with 4-connectivity in both directions.
///
/// Vertex `y * width + x` sits at column `x`, row `y`.
pub fn grid_graph(width: usize, height: usize, weight: i64) -> DirectedGraph<i64> {
    let mut graph = DirectedGraph::with_vertices(width * height);

    let index = |x: usize, y: usize| -> Vertex { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x + 1 < width {
                graph.insert_edge(current, index(x + 1, y), weight);
                graph.insert_edge(index(x + 1, y), current, weight);
            }
            if y + 1 < height {
                graph.insert_edge(current, index(x, y + 1), weight);
                graph.insert_edge(index(x, y + 1), current, weight);
            }
        }
    }

    graph
}
