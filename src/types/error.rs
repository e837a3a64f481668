//! Error types for the graph-reach library.
//!
//! Traversals never fail: an absent start or an empty result is reported
//! through the neutral value of the query. Errors only arise while building
//! graphs and reading or writing graph documents.

use thiserror::Error;

/// All errors that can occur in the graph-reach library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A vertex handle or document index does not name a vertex.
    #[error("Vertex {0} not found")]
    VertexNotFound(usize),

    /// A document of one kind was used where another kind was required.
    #[error("Expected a {expected} document, found {found}")]
    WrongDocumentKind {
        expected: &'static str,
        found: &'static str,
    },

    /// A board row has a different width than the first row.
    #[error("Board row {row} has width {got}, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A board has no rows or no columns.
    #[error("Board has no cells")]
    EmptyBoard,

    /// A command-line or document argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document.
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for graph-reach operations.
pub type GraphResult<T> = Result<T, GraphError>;
