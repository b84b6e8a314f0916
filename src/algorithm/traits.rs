use std::fmt::Debug;

use crate::data_structures::VertexIndex;
use crate::graph::{Graph, Vertex, Weight};
use crate::Result;

/// Queries answered by every shortest path result
pub trait ShortestPaths<W>
where
    W: Weight,
{
    /// Shortest distance from `source` to `target`, `None` if unreachable.
    ///
    /// Single-source results are bound to their own source and ignore the
    /// `source` argument.
    fn distance(&self, source: Vertex, target: Vertex) -> Option<W>;

    /// Vertices of a shortest path from `source` to `target`, both inclusive.
    ///
    /// Empty when `target` is unreachable; `[source]` when they are equal.
    fn path(&self, source: Vertex, target: Vertex) -> Vec<Vertex>;

    /// True if a negative cycle was detected while computing the result.
    ///
    /// Distances and paths through such a cycle are not reliable.
    fn has_negative_cycle(&self) -> bool;

    /// True if `target` can be reached from `source`
    fn is_reachable(&self, source: Vertex, target: Vertex) -> bool {
        self.distance(source, target).is_some()
    }
}

/// Result of a single-source shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct SingleSourceResult<W>
where
    W: Weight,
{
    /// Dense numbering of the graph's vertices
    pub(crate) index: VertexIndex,

    /// Distances from source to each vertex, by dense index
    pub(crate) distances: Vec<Option<W>>,

    /// Predecessor of each vertex in the shortest path tree, by dense index
    pub(crate) predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub(crate) source: Vertex,

    pub(crate) negative_cycle: bool,

    /// Name of the algorithm that produced the result
    pub(crate) algorithm: &'static str,
}

impl<W> SingleSourceResult<W>
where
    W: Weight,
{
    /// Source vertex the result is bound to
    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Name of the algorithm that produced the result
    pub fn algorithm(&self) -> &'static str {
        self.algorithm
    }

    /// Vertex preceding `vertex` on its shortest path from the source
    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let i = self.index.index_of(vertex)?;
        self.predecessors[i].map(|p| self.index.vertex_at(p))
    }

    /// Iterates over `(vertex, distance)` for every reachable vertex
    pub fn reachable(&self) -> impl Iterator<Item = (Vertex, W)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .filter_map(move |(i, d)| d.map(|d| (self.index.vertex_at(i), d)))
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }
}

impl<W> ShortestPaths<W> for SingleSourceResult<W>
where
    W: Weight,
{
    fn distance(&self, _source: Vertex, target: Vertex) -> Option<W> {
        let i = self.index.index_of(target)?;
        self.distances[i]
    }

    fn path(&self, _source: Vertex, target: Vertex) -> Vec<Vertex> {
        let Some(target) = self.index.index_of(target) else {
            return Vec::new();
        };
        if self.distances[target].is_none() {
            return Vec::new();
        }

        // Walk the predecessor chain back to the source. A chain longer than
        // the vertex count can only come from a negative cycle.
        let mut path = vec![self.index.vertex_at(target)];
        let mut current = target;
        while let Some(pred) = self.predecessors[current] {
            if path.len() > self.index.len() {
                log::warn!(
                    "predecessor chain to {} loops; negative cycle reachable from {}",
                    self.index.vertex_at(target),
                    self.source
                );
                return Vec::new();
            }
            path.push(self.index.vertex_at(pred));
            current = pred;
        }

        path.reverse();
        path
    }

    fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }
}

/// Result of an all-pairs shortest path computation
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: Weight,
{
    pub(crate) index: VertexIndex,

    /// Row-major `n * n` distance table
    pub(crate) distances: Vec<Option<W>>,

    /// Row-major `n * n` table of the next vertex on the `i -> j` path
    pub(crate) next: Vec<Option<usize>>,

    pub(crate) negative_cycle: bool,
}

impl<W> AllPairsResult<W>
where
    W: Weight,
{
    /// All vertices covered by the result
    pub fn vertices(&self) -> &[Vertex] {
        self.index.vertices()
    }

    /// Vertex following `from` on the shortest path towards `to`
    pub fn next_hop(&self, from: Vertex, to: Vertex) -> Option<Vertex> {
        let cell = self.cell(from, to)?;
        self.next[cell].map(|hop| self.index.vertex_at(hop))
    }

    fn cell(&self, from: Vertex, to: Vertex) -> Option<usize> {
        let i = self.index.index_of(from)?;
        let j = self.index.index_of(to)?;
        Some(i * self.index.len() + j)
    }
}

impl<W> ShortestPaths<W> for AllPairsResult<W>
where
    W: Weight,
{
    fn distance(&self, source: Vertex, target: Vertex) -> Option<W> {
        self.cell(source, target).and_then(|cell| self.distances[cell])
    }

    fn path(&self, source: Vertex, target: Vertex) -> Vec<Vertex> {
        let (Some(from), Some(to)) = (self.index.index_of(source), self.index.index_of(target))
        else {
            return Vec::new();
        };
        if from == to {
            return vec![source];
        }

        let n = self.index.len();
        let mut path = vec![source];
        let mut current = from;
        while current != to {
            let Some(hop) = self.next[current * n + to] else {
                return Vec::new();
            };
            if path.len() > n {
                log::warn!(
                    "next-hop chain {} -> {} loops; negative cycle on the way",
                    source,
                    target
                );
                return Vec::new();
            }
            path.push(self.index.vertex_at(hop));
            current = hop;
        }
        path
    }

    fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }
}

/// Trait for single-source shortest path algorithms
pub trait SingleSourceAlgorithm<W, G>: Debug
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: Vertex) -> Result<SingleSourceResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
