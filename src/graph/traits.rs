use std::fmt::Debug;
use num_traits::Zero;

/// Nonnegative integer identifier of a vertex
pub type Vertex = usize;

/// Numeric type that can label an edge and accumulate into a distance.
///
/// Satisfied by the signed integers and by `ordered_float::OrderedFloat<f64>`.
pub trait Weight: Copy + Debug + Ord + Zero {}

impl<T> Weight for T where T: Copy + Debug + Ord + Zero {}

/// Read-only view of a weighted directed graph.
///
/// The algorithms only ever read through this trait, so an implementation
/// shared across threads just needs to be safe for concurrent reads.
pub trait Graph<W>
where
    W: Weight,
{
    /// Returns every vertex of the graph exactly once, in any order
    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_>;

    /// Returns the out-neighbors of a vertex (empty if it has none)
    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_>;

    /// Returns the weight of the edge `from -> to`.
    ///
    /// Only called for pairs where `to` appears in `neighbors(from)`.
    fn weight(&self, from: Vertex, to: Vertex) -> W;

    /// Returns the outgoing edges of a vertex as `(neighbor, weight)` pairs
    fn outgoing_edges(&self, vertex: Vertex) -> Box<dyn Iterator<Item = (Vertex, W)> + '_> {
        Box::new(
            self.neighbors(vertex)
                .map(move |to| (to, self.weight(vertex, to))),
        )
    }

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }
}
