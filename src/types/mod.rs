//! All data types for the graph-reach library.

pub mod error;
pub mod professional;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use professional::{Professional, ProfessionalNetwork};
pub use vertex::{Vertex, VertexId};
