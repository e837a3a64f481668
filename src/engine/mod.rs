//! High-level operations: the query engine.

pub mod query;

pub use query::QueryEngine;
