//! Arena-backed vertex graph: payload-carrying vertices with outgoing neighbor lists.

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

/// A directed graph whose vertices own a value and an ordered neighbor list.
///
/// Vertices live in an arena and are referred to by [`VertexId`]. The graph
/// may contain cycles, self loops and parallel edges.
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    /// All vertices, indexed by handle.
    vertices: Vec<Vertex<T>>,
    /// Total number of edges across all neighbor lists.
    edge_count: usize,
}

impl<T> VertexGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Add a vertex, returns its handle.
    pub fn add_vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(data));
        id
    }

    /// Add a directed edge between two existing vertices.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to.0));
        }
        let source = self
            .vertices
            .get_mut(from.0)
            .ok_or(GraphError::VertexNotFound(from.0))?;
        source.neighbors.push(to);
        self.edge_count += 1;
        Ok(())
    }

    /// Get a vertex by handle.
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// Get the payload of a vertex.
    pub fn data(&self, id: VertexId) -> Option<&T> {
        self.get(id).map(|v| &v.data)
    }

    /// Outgoing neighbors of a vertex, empty for an unknown handle.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        match self.vertices.get(id.0) {
            Some(vertex) => &vertex.neighbors,
            None => &[],
        }
    }

    /// All vertex handles, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// All vertices (immutable slice).
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}
