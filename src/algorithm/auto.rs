use std::collections::VecDeque;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{SingleSourceAlgorithm, SingleSourceResult};
use crate::data_structures::VertexIndex;
use crate::graph::{Graph, Vertex, Weight};
use crate::{Error, Result};

/// Algorithm selection mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoMode {
    /// Pick Dijkstra unless a negative edge is reachable from the source
    #[default]
    Auto,
    /// Always use Dijkstra
    ForceDijkstra,
    /// Always use Bellman-Ford
    ForceBellmanFord,
}

/// Single-source shortest paths that pick the algorithm from the graph's weights
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoShortestPath {
    mode: AutoMode,
}

impl AutoShortestPath {
    /// Creates a selector in [`AutoMode::Auto`]
    pub fn new() -> Self {
        AutoShortestPath::default()
    }

    /// Set the selection mode
    pub fn with_mode(mut self, mode: AutoMode) -> Self {
        self.mode = mode;
        self
    }

    /// Current selection mode
    pub fn mode(&self) -> AutoMode {
        self.mode
    }

    /// Breadth-first scan of the edges reachable from `source`, stopping at
    /// the first negative weight
    fn reaches_negative_edge<W, G>(&self, graph: &G, index: &VertexIndex, source: usize) -> bool
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut visited = vec![false; index.len()];
        let mut queue = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = queue.pop_front() {
            for (v, weight) in graph.outgoing_edges(index.vertex_at(u)) {
                if weight < W::zero() {
                    return true;
                }
                if let Some(v) = index.index_of(v) {
                    if !visited[v] {
                        visited[v] = true;
                        queue.push_back(v);
                    }
                }
            }
        }

        false
    }
}

impl<W, G> SingleSourceAlgorithm<W, G> for AutoShortestPath
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Auto"
    }

    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<SingleSourceResult<W>> {
        match self.mode {
            AutoMode::ForceDijkstra => Dijkstra::new().compute_shortest_paths(graph, source),
            AutoMode::ForceBellmanFord => BellmanFord::new().compute_shortest_paths(graph, source),
            AutoMode::Auto => {
                let index = VertexIndex::from_graph(graph);
                let s = index.index_of(source).ok_or(Error::SourceNotFound(source))?;

                if self.reaches_negative_edge(graph, &index, s) {
                    log::debug!("negative edge reachable from {}, using Bellman-Ford", source);
                    BellmanFord::new().compute_shortest_paths(graph, source)
                } else {
                    log::debug!("all weights reachable from {} are nonnegative, using Dijkstra", source);
                    Dijkstra::new().compute_shortest_paths(graph, source)
                }
            }
        }
    }
}
