use crate::algorithm::{SingleSourceAlgorithm, SingleSourceResult};
use crate::data_structures::VertexIndex;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Classic Dijkstra's algorithm implementation
///
/// Requires nonnegative edge weights. This is not checked: a negative edge
/// gives wrong distances but the run still terminates, because a vertex is
/// never reopened once it has been popped from the heap.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> SingleSourceAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<SingleSourceResult<W>> {
        let index = VertexIndex::from_graph(graph);
        let s = index.index_of(source).ok_or(Error::SourceNotFound(source))?;
        let n = index.len();
        log::debug!("Dijkstra from {} over {} vertices", source, n);

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[s] = Some(W::zero());

        // Max-heap on Reverse(distance); unreached vertices only enter once an
        // edge reaches them
        let mut queue: PriorityQueue<usize, Reverse<W>> = PriorityQueue::with_capacity(n);
        queue.push(s, Reverse(W::zero()));

        while let Some((u, Reverse(dist_u))) = queue.pop() {
            settled[u] = true;

            for (v, weight) in graph.outgoing_edges(index.vertex_at(u)) {
                let Some(v) = index.index_of(v) else {
                    continue;
                };
                if settled[v] {
                    continue;
                }

                let new_dist = dist_u + weight;
                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    // A shorter distance is a higher Reverse priority
                    queue.push_increase(v, Reverse(new_dist));
                }
            }
        }

        let result = SingleSourceResult {
            index,
            distances,
            predecessors,
            source,
            negative_cycle: false,
            algorithm: "Dijkstra",
        };
        log::debug!(
            "Dijkstra from {} reached {} vertices",
            source,
            result.reachable_count()
        );
        Ok(result)
    }
}
