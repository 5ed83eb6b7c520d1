// ============================================================
// Layer 4: CSV Document Loader
// ============================================================
// Reads the tabular input format: a header row naming the columns,
// then one post per row. Only the "tag" and "content" columns are
// used; any other columns are ignored.
//
// Failure points:
//   - open:  file missing/unreadable, or header lacks a required column
//   - read:  a row with the wrong number of fields
//
// Rows are read as raw byte records, so non-UTF-8 content is passed
// through untouched rather than rejected. They are pulled lazily, one
// per `next()`, so training and evaluation never hold a whole file in
// memory.
//
// Reference: csv crate documentation (ByteRecord, byte_headers)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use std::{fs::File, path::PathBuf};

use crate::domain::document::Document;
use crate::domain::traits::{DocumentSource, SourceError};

/// Columns every input file must carry
pub const REQUIRED_COLUMNS: [&str; 2] = ["tag", "content"];

/// Points at a CSV file; nothing is read until `open()`.
pub struct CsvLoader {
    path: PathBuf,
}

impl CsvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the file and validate its header.
    ///
    /// Returns a `CsvSource` positioned at the first data row. Any
    /// failure carries a `SourceError` naming this file.
    pub fn open(&self) -> Result<CsvSource> {
        self.try_open()
            .context(SourceError::new(self.path.display().to_string()))
    }

    fn try_open(&self) -> Result<CsvSource> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .with_context(|| format!("Cannot open '{}'", self.path.display()))?;

        let headers = reader
            .byte_headers()
            .with_context(|| format!("Cannot read header of '{}'", self.path.display()))?
            .clone();

        // First occurrence wins if a column name repeats
        let column = |name: &str| headers.iter().position(|h| h == name.as_bytes());
        let (tag, content) = match (column("tag"), column("content")) {
            (Some(tag), Some(content)) => (tag, content),
            _ => anyhow::bail!(
                "'{}' must have {:?} columns (found: {:?})",
                self.path.display(),
                REQUIRED_COLUMNS,
                headers
                    .iter()
                    .map(String::from_utf8_lossy)
                    .collect::<Vec<_>>(),
            ),
        };

        tracing::debug!(
            "Opened '{}' with {} columns",
            self.path.display(),
            headers.len()
        );

        Ok(CsvSource {
            name: self.path.display().to_string(),
            reader,
            tag,
            content,
        })
    }
}

/// An opened CSV file, streamed row by row.
pub struct CsvSource {
    name:    String,
    reader:  csv::Reader<File>,
    tag:     usize,
    content: usize,
}

impl DocumentSource for CsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn documents(&mut self) -> Box<dyn Iterator<Item = Result<Document>> + '_> {
        let name = &self.name;
        let (tag, content) = (self.tag, self.content);

        Box::new(self.reader.byte_records().map(move |row| {
            to_document(row, tag, content).context(SourceError::new(name.clone()))
        }))
    }
}

/// Pick the label and text fields out of one raw row.
fn to_document(row: csv::Result<csv::ByteRecord>, tag: usize, content: usize) -> Result<Document> {
    let row = row.context("malformed row")?;
    // Strict field counts make every row as wide as the header
    let field = |i: usize| row.get(i).unwrap_or_default().to_vec();
    Ok(Document::new(field(tag), field(content)))
}
