use std::collections::HashMap;

use crate::graph::{Graph, Vertex, Weight};

/// Dense numbering of a graph's vertices.
///
/// Working tables are flat vectors addressed by the dense index, so the
/// mapping is built once per algorithm run and shared by every lookup.
#[derive(Debug, Clone, Default)]
pub struct VertexIndex {
    /// Dense index -> vertex id
    vertices: Vec<Vertex>,

    /// Vertex id -> dense index
    indices: HashMap<Vertex, usize>,
}

impl VertexIndex {
    /// Numbers the vertices of a graph in the order `Graph::vertices` yields them
    pub fn from_graph<W, G>(graph: &G) -> Self
    where
        W: Weight,
        G: Graph<W>,
    {
        let mut index = VertexIndex::default();
        for vertex in graph.vertices() {
            index.insert(vertex);
        }
        index
    }

    fn insert(&mut self, vertex: Vertex) {
        if !self.indices.contains_key(&vertex) {
            self.indices.insert(vertex, self.vertices.len());
            self.vertices.push(vertex);
        }
    }

    /// Returns the number of indexed vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Dense index of a vertex, if it belongs to the graph
    pub fn index_of(&self, vertex: Vertex) -> Option<usize> {
        self.indices.get(&vertex).copied()
    }

    /// Vertex id at a dense index
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn vertex_at(&self, index: usize) -> Vertex {
        self.vertices[index]
    }

    /// All vertex ids in dense order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;

    #[test]
    fn test_sparse_ids_get_dense_indices() {
        let graph = DirectedGraph::from_edges([(40, 7, 1i64), (7, 1000, 2)]);
        let index = VertexIndex::from_graph(&graph);

        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of(40), Some(0));
        assert_eq!(index.index_of(7), Some(1));
        assert_eq!(index.index_of(1000), Some(2));
        assert_eq!(index.index_of(3), None);
        assert_eq!(index.vertex_at(2), 1000);
        assert_eq!(index.vertices(), &[40, 7, 1000]);
    }
}
