//! Adjacency-map graph keyed by integer vertex ids.

use std::collections::{HashMap, HashSet};

/// A directed graph stored as `id -> set of directly reachable ids`.
///
/// Only keys are vertices. An id that appears solely as a neighbor is not a
/// vertex and is never entered by a traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapGraph {
    adjacency: HashMap<i32, HashSet<i32>>,
}

impl MapGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
        }
    }

    /// Number of vertices (keys).
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges across all adjacency sets.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Whether `id` is a key of the adjacency map.
    pub fn contains(&self, id: i32) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Add `id` as a vertex with no outgoing edges. No-op if already present.
    pub fn add_vertex(&mut self, id: i32) -> &mut Self {
        self.adjacency.entry(id).or_default();
        self
    }

    /// Add an edge `from -> to`.
    ///
    /// `from` becomes a key if it was not one; `to` does not.
    pub fn add_edge(&mut self, from: i32, to: i32) -> &mut Self {
        self.adjacency.entry(from).or_default().insert(to);
        self
    }

    /// Neighbors of `id`, or `None` if `id` is not a vertex.
    pub fn neighbors(&self, id: i32) -> Option<&HashSet<i32>> {
        self.adjacency.get(&id)
    }

    /// All vertex ids, in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.adjacency.keys().copied()
    }

    /// The underlying adjacency map.
    pub fn adjacency(&self) -> &HashMap<i32, HashSet<i32>> {
        &self.adjacency
    }
}

impl From<HashMap<i32, HashSet<i32>>> for MapGraph {
    fn from(adjacency: HashMap<i32, HashSet<i32>>) -> Self {
        Self { adjacency }
    }
}

impl<I> FromIterator<(i32, I)> for MapGraph
where
    I: IntoIterator<Item = i32>,
{
    fn from_iter<It: IntoIterator<Item = (i32, I)>>(iter: It) -> Self {
        let mut graph = Self::new();
        for (id, neighbors) in iter {
            graph.add_vertex(id);
            for neighbor in neighbors {
                graph.add_edge(id, neighbor);
            }
        }
        graph
    }
}
