use std::collections::VecDeque;

use crate::algorithm::{SingleSourceAlgorithm, SingleSourceResult};
use crate::data_structures::VertexIndex;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Single-source shortest paths that tolerate negative edge weights.
///
/// Queue-driven Bellman-Ford: only vertices whose distance just improved are
/// rescanned. Each tentative distance remembers how many edges the walk behind
/// it has; a walk of `n` edges repeats a vertex, and with no negative cycle
/// such a walk can never be an improvement. Hitting that bound therefore
/// proves a negative cycle and ends relaxation, so the run always terminates.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    current.map_or(true, |current| candidate < current)
}

impl<W, G> SingleSourceAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<SingleSourceResult<W>> {
        let index = VertexIndex::from_graph(graph);
        let s = index.index_of(source).ok_or(Error::SourceNotFound(source))?;
        let n = index.len();
        log::debug!("Bellman-Ford from {} over {} vertices", source, n);

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut hops = vec![0usize; n];
        let mut negative_cycle = false;

        distances[s] = Some(W::zero());

        let mut queue = VecDeque::from([s]);
        let mut in_queue = vec![false; n];
        in_queue[s] = true;
        let mut relaxations = 0usize;

        'relax: while let Some(u) = queue.pop_front() {
            in_queue[u] = false;
            let Some(dist_u) = distances[u] else {
                continue;
            };

            for (v, weight) in graph.outgoing_edges(index.vertex_at(u)) {
                let Some(v) = index.index_of(v) else {
                    continue;
                };

                let new_dist = dist_u + weight;
                if !improves(new_dist, distances[v]) {
                    continue;
                }

                if hops[u] + 1 >= n {
                    log::trace!("walk to {} reached {} edges", index.vertex_at(v), n);
                    negative_cycle = true;
                    break 'relax;
                }

                distances[v] = Some(new_dist);
                predecessors[v] = Some(u);
                hops[v] = hops[u] + 1;
                relaxations += 1;

                if !in_queue[v] {
                    in_queue[v] = true;
                    queue.push_back(v);
                }
            }
        }
        log::trace!("Bellman-Ford settled after {} relaxations", relaxations);

        // Any edge that can still be relaxed sits downstream of a negative cycle
        if !negative_cycle {
            negative_cycle = index.vertices().iter().enumerate().any(|(u, &vertex)| {
                let Some(dist_u) = distances[u] else {
                    return false;
                };
                graph.outgoing_edges(vertex).any(|(v, weight)| {
                    index
                        .index_of(v)
                        .map_or(false, |v| improves(dist_u + weight, distances[v]))
                })
            });
        }

        if negative_cycle {
            log::warn!("negative cycle reachable from {}", source);
        }

        let result = SingleSourceResult {
            index,
            distances,
            predecessors,
            source,
            negative_cycle,
            algorithm: "Bellman-Ford",
        };
        log::debug!(
            "Bellman-Ford from {} reached {} vertices",
            source,
            result.reachable_count()
        );
        Ok(result)
    }
}
