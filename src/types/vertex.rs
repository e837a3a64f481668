//! Vertex handles and the vertex record stored in a vertex graph.

use std::fmt;

/// Handle to a vertex inside a [`VertexGraph`](crate::graph::VertexGraph).
///
/// Identity is the handle, not the payload: two vertices holding equal data
/// are still distinct vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Create a handle from a raw arena index.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw arena index behind this handle.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: its payload plus outgoing neighbor handles, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    /// The value carried by this vertex.
    pub data: T,
    /// Outgoing edges. Duplicates and self references are allowed.
    pub neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with no outgoing edges.
    pub fn new(data: T) -> Self {
        Self {
            data,
            neighbors: Vec::new(),
        }
    }
}
