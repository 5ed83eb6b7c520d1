// ============================================================
// Layer 3: Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the classifier
// works with. Nothing in here touches files, CSV or statistics.
//
//   document.rs  - a single labelled post (label + text)
//   traits.rs    - the DocumentSource abstraction that every
//                  input collaborator implements
//
// The statistical model lives in Layer 5 (ml); this layer only
// defines the records flowing into it.

// A labelled document as it arrives from the input
pub mod document;

// Core abstractions (traits) that other layers implement
pub mod traits;
