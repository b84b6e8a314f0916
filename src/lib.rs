//! Shortest Paths - single-source and all-pairs shortest path algorithms
//!
//! Any graph that implements the read-only [`Graph`] capability can be handed to
//! one of three algorithms:
//!
//! - [`Dijkstra`] for single-source queries on graphs with nonnegative weights,
//! - [`BellmanFord`] for single-source queries that may contain negative edges,
//! - [`FloydWarshall`] for distances between every ordered pair of vertices.
//!
//! Every algorithm returns a result implementing [`ShortestPaths`], which answers
//! distance and path queries and reports whether a negative cycle was detected.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    auto::{AutoMode, AutoShortestPath},
    bellman_ford::BellmanFord,
    dijkstra::Dijkstra,
    floyd_warshall::FloydWarshall,
    AllPairsResult, ShortestPaths, SingleSourceAlgorithm, SingleSourceResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, Vertex, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Source vertex {0} not found in graph")]
    SourceNotFound(Vertex),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(Vertex, Vertex),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Single-source shortest paths on a graph with nonnegative weights.
pub fn dijkstra<W, G>(graph: &G, source: Vertex) -> Result<SingleSourceResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}

/// Single-source shortest paths on a graph that may have negative weights.
pub fn bellman_ford<W, G>(graph: &G, source: Vertex) -> Result<SingleSourceResult<W>>
where
    W: Weight,
    G: Graph<W>,
{
    BellmanFord::new().compute_shortest_paths(graph, source)
}

/// Shortest paths between every ordered pair of vertices.
pub fn floyd_warshall<W, G>(graph: &G) -> AllPairsResult<W>
where
    W: Weight,
    G: Graph<W>,
{
    FloydWarshall::new().compute_all_pairs(graph)
}
