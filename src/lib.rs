//! graph-reach: cycle-safe reachability queries over graphs.
//!
//! Two graph representations are supported: an arena of payload-carrying
//! vertices with neighbor lists ([`VertexGraph`]) and an adjacency map keyed
//! by integer id ([`MapGraph`]). Every query is a depth-first walk that marks
//! vertices before exploring them, folding each reachable vertex exactly once
//! into a [`Reduction`].

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod grid;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::QueryEngine;
pub use format::{DocumentReader, DocumentWriter, GraphDocument};
pub use graph::{
    walk, walk_ids, walk_ids_where, Collect, Contains, CountAbove, EvenSum, Fold, MapGraph,
    OddCount, Reduction, SortedCollect, VertexGraph, VertexGraphBuilder,
};
pub use grid::{next_moves, Board, Direction, Position, BLOCKED_CELL};
pub use types::{GraphError, GraphResult, Professional, ProfessionalNetwork, Vertex, VertexId};
