pub mod traits;
pub mod dijkstra;
pub mod bellman_ford;
pub mod floyd_warshall;
pub mod auto;

pub use traits::{AllPairsResult, ShortestPaths, SingleSourceAlgorithm, SingleSourceResult};
