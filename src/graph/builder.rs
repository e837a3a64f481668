//! Fluent API for building VertexGraph instances.

use crate::types::{GraphResult, VertexId};

use super::VertexGraph;

/// Fluent builder for constructing a VertexGraph.
///
/// Handles are handed out as vertices are added, so links may be declared
/// in any order; they are validated once, in [`build`](Self::build).
pub struct VertexGraphBuilder<T> {
    values: Vec<T>,
    links: Vec<(VertexId, VertexId)>,
}

impl<T> VertexGraphBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex carrying `data`, returns the handle it will have in the built graph.
    pub fn vertex(&mut self, data: T) -> VertexId {
        let id = VertexId(self.values.len());
        self.values.push(data);
        id
    }

    /// Add a directed edge `from -> to`.
    pub fn link(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.links.push((from, to));
        self
    }

    /// Add a directed edge from `from` to each of `targets`, in order.
    pub fn link_all(&mut self, from: VertexId, targets: &[VertexId]) -> &mut Self {
        for &to in targets {
            self.links.push((from, to));
        }
        self
    }

    /// Build the final VertexGraph.
    pub fn build(self) -> GraphResult<VertexGraph<T>> {
        let mut graph = VertexGraph::with_capacity(self.values.len());
        for value in self.values {
            graph.add_vertex(value);
        }
        for (from, to) in self.links {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}

impl<T> Default for VertexGraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
