//! JSON graph documents: the input format of the `greach` driver.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::GraphDocument;
pub use reader::DocumentReader;
pub use writer::DocumentWriter;
