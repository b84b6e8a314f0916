use crate::graph::traits::{Graph, Vertex, Weight};
use crate::{Error, Result};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists
///
/// Vertex ids do not have to be contiguous; `vertices()` reports them in
/// insertion order.
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Vertex ids in insertion order
    vertices: Vec<Vertex>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<Vertex, Vec<(Vertex, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with vertices `0..vertices`
    pub fn with_vertices(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            outgoing_edges: HashMap::with_capacity(vertices),
        };

        for v in 0..vertices {
            graph.add_vertex(v);
        }

        graph
    }

    /// Builds a graph from `(from, to, weight)` triples, creating vertices on demand
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (Vertex, Vertex, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_vertex(from);
            graph.add_vertex(to);
            graph.insert_edge(from, to, weight);
        }
        graph
    }

    /// Adds a vertex; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: Vertex) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        self.vertices.push(vertex);
        true
    }

    /// Adds a directed edge between existing vertices.
    ///
    /// Adding an edge that already exists replaces its weight.
    pub fn add_edge(&mut self, from: Vertex, to: Vertex, weight: W) -> Result<()> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return Err(Error::InvalidEdge(from, to));
        }
        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Inserts or reweights an edge; both endpoints must already exist
    pub(crate) fn insert_edge(&mut self, from: Vertex, to: Vertex, weight: W) {
        let outgoing = self.outgoing_edges.entry(from).or_default();
        match outgoing.iter().position(|(target, _)| *target == to) {
            Some(i) => outgoing[i].1 = weight,
            None => outgoing.push((to, weight)),
        }
    }

    /// Returns true if the vertex exists in the graph
    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        self.outgoing_edges.contains_key(&vertex)
    }

    /// Returns true if there's an edge between the two vertices
    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: Vertex, to: Vertex) -> Option<W> {
        self.outgoing_edges
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    /// Returns true if any edge carries a negative weight
    pub fn has_negative_weight(&self) -> bool {
        self.outgoing_edges
            .values()
            .flatten()
            .any(|(_, weight)| *weight < W::zero())
    }
}

impl<W> Default for DirectedGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn neighbors(&self, vertex: Vertex) -> Box<dyn Iterator<Item = Vertex> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().map(|(target, _)| *target))
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// # Panics
    /// Panics if `from -> to` is not an edge of the graph.
    fn weight(&self, from: Vertex, to: Vertex) -> W {
        match self.edge_weight(from, to) {
            Some(weight) => weight,
            None => panic!("weight requested for missing edge {} -> {}", from, to),
        }
    }

    fn outgoing_edges(&self, vertex: Vertex) -> Box<dyn Iterator<Item = (Vertex, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_requires_known_vertices() {
        let mut graph: DirectedGraph<i64> = DirectedGraph::with_vertices(2);
        assert!(graph.add_edge(0, 1, 4).is_ok());
        assert_eq!(graph.add_edge(0, 7, 1), Err(Error::InvalidEdge(0, 7)));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_readding_edge_replaces_weight() {
        let mut graph = DirectedGraph::from_edges([(3, 9, 5i64)]);
        graph.add_edge(3, 9, -2).unwrap();
        assert_eq!(graph.edge_weight(3, 9), Some(-2));
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_negative_weight());
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![3, 9]);
    }
}
