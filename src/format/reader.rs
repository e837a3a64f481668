//! Reads JSON graph documents.

use std::io::Read;
use std::path::Path;

use log::debug;

use crate::types::error::GraphResult;

use super::GraphDocument;

/// Reader for JSON graph documents.
pub struct DocumentReader;

impl DocumentReader {
    /// Read a document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<GraphDocument> {
        let data = std::fs::read_to_string(path)?;
        let document = Self::read_from_str(&data)?;
        debug!("read {} document from {}", document.kind(), path.display());
        Ok(document)
    }

    /// Read a document from any reader.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<GraphDocument> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a document from a JSON string.
    pub fn read_from_str(data: &str) -> GraphResult<GraphDocument> {
        Ok(serde_json::from_str(data)?)
    }
}
