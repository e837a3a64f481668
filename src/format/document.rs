//! JSON graph documents and their conversion to in-memory graphs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::{MapGraph, VertexGraph, VertexGraphBuilder};
use crate::grid::Board;
use crate::types::{GraphError, GraphResult, Professional, ProfessionalNetwork, VertexId};

/// A graph description, tagged by `"kind"` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphDocument {
    /// Integer vertex graph: vertex values by position, edges as index pairs.
    Vertex {
        vertices: Vec<i32>,
        #[serde(default)]
        edges: Vec<(usize, usize)>,
    },
    /// Adjacency map keyed by integer id.
    ///
    /// JSON object keys are strings; they are parsed as ids on conversion.
    Map {
        adjacency: BTreeMap<String, Vec<i32>>,
    },
    /// Professional network: people by position, connections as index pairs.
    Network {
        people: Vec<Professional>,
        #[serde(default)]
        connections: Vec<(usize, usize)>,
    },
    /// Movement board, one string per row.
    Board { rows: Vec<String> },
}

impl GraphDocument {
    /// The `"kind"` tag of this document.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Vertex { .. } => "vertex",
            Self::Map { .. } => "map",
            Self::Network { .. } => "network",
            Self::Board { .. } => "board",
        }
    }

    /// Describe a vertex graph.
    pub fn from_vertex_graph(graph: &VertexGraph<i32>) -> Self {
        let (vertices, edges) = split_vertex_graph(graph);
        Self::Vertex { vertices, edges }
    }

    /// Describe a map graph. Neighbor lists are written sorted.
    pub fn from_map_graph(graph: &MapGraph) -> Self {
        let adjacency = graph
            .adjacency()
            .iter()
            .map(|(&id, neighbors)| {
                let mut neighbors: Vec<i32> = neighbors.iter().copied().collect();
                neighbors.sort_unstable();
                (id.to_string(), neighbors)
            })
            .collect();
        Self::Map { adjacency }
    }

    /// Describe a professional network.
    pub fn from_network(network: &ProfessionalNetwork) -> Self {
        let (people, connections) = split_vertex_graph(network);
        Self::Network {
            people,
            connections,
        }
    }

    /// Describe a board.
    pub fn from_board(board: &Board) -> Self {
        Self::Board { rows: board.rows() }
    }

    /// Build the vertex graph this document describes.
    pub fn into_vertex_graph(self) -> GraphResult<VertexGraph<i32>> {
        match self {
            Self::Vertex { vertices, edges } => build_vertex_graph(vertices, edges),
            other => Err(wrong_kind("vertex", &other)),
        }
    }

    /// Build the map graph this document describes.
    pub fn into_map_graph(self) -> GraphResult<MapGraph> {
        match self {
            Self::Map { adjacency } => {
                let mut graph = MapGraph::new();
                for (key, neighbors) in adjacency {
                    let id: i32 = key.trim().parse().map_err(|_| {
                        GraphError::InvalidArgument(format!("vertex id '{}'", key))
                    })?;
                    graph.add_vertex(id);
                    for neighbor in neighbors {
                        graph.add_edge(id, neighbor);
                    }
                }
                Ok(graph)
            }
            other => Err(wrong_kind("map", &other)),
        }
    }

    /// Build the professional network this document describes.
    pub fn into_network(self) -> GraphResult<ProfessionalNetwork> {
        match self {
            Self::Network {
                people,
                connections,
            } => build_vertex_graph(people, connections),
            other => Err(wrong_kind("network", &other)),
        }
    }

    /// Build the board this document describes.
    pub fn into_board(self) -> GraphResult<Board> {
        match self {
            Self::Board { rows } => Board::from_rows(rows.as_slice()),
            other => Err(wrong_kind("board", &other)),
        }
    }
}

fn wrong_kind(expected: &'static str, found: &GraphDocument) -> GraphError {
    GraphError::WrongDocumentKind {
        expected,
        found: found.kind(),
    }
}

fn build_vertex_graph<T>(
    values: Vec<T>,
    edges: Vec<(usize, usize)>,
) -> GraphResult<VertexGraph<T>> {
    let mut builder = VertexGraphBuilder::new();
    for value in values {
        builder.vertex(value);
    }
    for (from, to) in edges {
        builder.link(VertexId::new(from), VertexId::new(to));
    }
    builder.build()
}

fn split_vertex_graph<T: Clone>(graph: &VertexGraph<T>) -> (Vec<T>, Vec<(usize, usize)>) {
    let values = graph.vertices().iter().map(|v| v.data.clone()).collect();
    let edges = graph
        .ids()
        .flat_map(|id| {
            graph
                .neighbors(id)
                .iter()
                .map(move |n| (id.index(), n.index()))
        })
        .collect();
    (values, edges)
}
