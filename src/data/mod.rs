// ============================================================
// Layer 4: Data Pipeline
// ============================================================
// Everything between a file on disk and the token sets the model
// consumes:
//
//   CSV file ("tag", "content" columns)
//       │
//       ▼
//   CsvLoader / CsvSource  → header check, lazy row stream
//       │
//       ▼
//   Document               → (label, text)
//       │
//       ▼
//   tokenize               → set of unique whitespace tokens
//
// No cleaning happens on the way: tokens are compared byte for byte.

/// Opens tabular files and streams their rows as Documents
pub mod loader;

/// Splits text into the set of unique tokens
pub mod tokenizer;
