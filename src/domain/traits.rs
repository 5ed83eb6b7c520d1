// ============================================================
// Layer 3: Core Traits (Abstractions)
// ============================================================
// The use cases in Layer 2 only ever see a DocumentSource, so the
// CSV reader can be swapped for an in-memory list in tests.
//
// Implementations:
//   - CsvSource      → rows of a file with "tag"/"content" columns
//   - Vec<Document>  → in-memory documents (tests, embedding)

use anyhow::Result;
use std::fmt;

use crate::domain::document::Document;

// ─── SourceError ──────────────────────────────────────────────────────────────
/// Marks an error as "this input could not be opened or read".
///
/// Sources attach it as anyhow context, so the CLI can name the
/// failing input with `err.downcast_ref::<SourceError>()` no matter
/// what the underlying cause (I/O, CSV, header check) was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceError {
    /// Name of the failing source (file path for CSV input)
    pub name: String,
}

impl SourceError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read document source '{}'", self.name)
    }
}

impl std::error::Error for SourceError {}

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Anything that can hand out documents one at a time, in order.
///
/// The sequence is lazy: a source yields the next record only when
/// asked, and a failed read surfaces as an `Err` item. Callers stop
/// at the first error.
pub trait DocumentSource {
    /// Human readable name of the source, used in diagnostics
    fn name(&self) -> &str;

    /// Stream the documents of this source in arrival order.
    fn documents(&mut self) -> Box<dyn Iterator<Item = Result<Document>> + '_>;
}

/// An in-memory list of documents is a trivially infallible source.
impl DocumentSource for Vec<Document> {
    fn name(&self) -> &str {
        "<memory>"
    }

    fn documents(&mut self) -> Box<dyn Iterator<Item = Result<Document>> + '_> {
        Box::new(self.drain(..).map(Ok::<_, anyhow::Error>))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_is_recoverable_from_context() {
        let err = anyhow::anyhow!("disk on fire").context(SourceError::new("train.csv"));
        let found = err.downcast_ref::<SourceError>().unwrap();
        assert_eq!(found.name, "train.csv");
    }

    #[test]
    fn test_vec_source_yields_in_order() {
        let mut docs = vec![Document::new("a", "x"), Document::new("b", "y")];
        let labels: Vec<Vec<u8>> = docs
            .documents()
            .map(|d| d.map(|d| d.label))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(labels, vec![b"a".to_vec(), b"b".to_vec()]);
    }
}
