//! Writes JSON graph documents.

use std::io::Write;
use std::path::Path;

use log::debug;

use crate::types::error::GraphResult;

use super::GraphDocument;

/// Writer for JSON graph documents.
pub struct DocumentWriter {
    pretty: bool,
}

impl DocumentWriter {
    /// Create a writer producing compact JSON.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a writer producing indented JSON.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write a document to a file, replacing any existing content.
    pub fn write_to_file(&self, document: &GraphDocument, path: &Path) -> GraphResult<()> {
        let mut file = std::fs::File::create(path)?;
        self.write_to(document, &mut file)?;
        file.flush()?;
        debug!("wrote {} document to {}", document.kind(), path.display());
        Ok(())
    }

    /// Write a document to any writer.
    pub fn write_to(&self, document: &GraphDocument, writer: &mut impl Write) -> GraphResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, document)?;
        } else {
            serde_json::to_writer(&mut *writer, document)?;
        }
        writeln!(writer)?;
        Ok(())
    }

    /// Render a document as a JSON string.
    pub fn to_string(&self, document: &GraphDocument) -> GraphResult<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };
        Ok(text)
    }
}

impl Default for DocumentWriter {
    fn default() -> Self {
        Self::new()
    }
}
