//! In-memory graph representations and the traversal engine over them.

pub mod builder;
pub mod map_graph;
pub mod reduction;
pub mod traversal;
pub mod vertex_graph;

pub use builder::VertexGraphBuilder;
pub use map_graph::MapGraph;
pub use reduction::{Collect, Contains, CountAbove, EvenSum, Fold, OddCount, Reduction, SortedCollect};
pub use traversal::{walk, walk_ids, walk_ids_where};
pub use vertex_graph::VertexGraph;
