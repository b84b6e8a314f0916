use crate::algorithm::AllPairsResult;
use crate::data_structures::VertexIndex;
use crate::graph::{Graph, Weight};

/// Floyd-Warshall all-pairs shortest paths.
///
/// Time: O(V^3), Memory: O(V^2). Tolerates negative edges; a vertex whose
/// distance to itself ends up negative lies on a negative cycle.
#[derive(Debug, Default, Clone, Copy)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new Floyd-Warshall algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Floyd-Warshall"
    }

    /// Compute shortest paths between every ordered pair of vertices
    pub fn compute_all_pairs<W, G>(&self, graph: &G) -> AllPairsResult<W>
    where
        W: Weight,
        G: Graph<W>,
    {
        let index = VertexIndex::from_graph(graph);
        let n = index.len();
        log::debug!("Floyd-Warshall over {} vertices", n);

        // Initialize dense distance matrix [n, n]
        let mut distances: Vec<Option<W>> = vec![None; n * n];
        let mut next: Vec<Option<usize>> = vec![None; n * n];

        for i in 0..n {
            distances[i * n + i] = Some(W::zero());

            for (to, weight) in graph.outgoing_edges(index.vertex_at(i)) {
                let Some(j) = index.index_of(to) else {
                    continue;
                };
                // A self-loop only matters when it is negative
                if i == j && weight >= W::zero() {
                    continue;
                }
                distances[i * n + j] = Some(weight);
                next[i * n + j] = Some(j);
            }
        }

        // D[i,j] = min(D[i,j], D[i,k] + D[k,j])
        for k in 0..n {
            for i in 0..n {
                let Some(d_ik) = distances[i * n + k] else {
                    continue;
                };
                for j in 0..n {
                    let Some(d_kj) = distances[k * n + j] else {
                        continue;
                    };
                    let through_k = d_ik + d_kj;
                    let better = distances[i * n + j].map_or(true, |d_ij| through_k < d_ij);
                    if better {
                        distances[i * n + j] = Some(through_k);
                        next[i * n + j] = next[i * n + k];
                    }
                }
            }
        }

        let negative_cycle = (0..n).any(|v| {
            distances[v * n + v].map_or(false, |d| d < W::zero())
        });
        if negative_cycle {
            log::warn!("negative cycle detected by Floyd-Warshall");
        }

        AllPairsResult {
            index,
            distances,
            next,
            negative_cycle,
        }
    }
}
