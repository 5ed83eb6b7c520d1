// ============================================================
// Layer 6: Infrastructure Layer
// ============================================================
// Cross-cutting concerns that belong to no single business layer.
//
//   metrics.rs  - accuracy tally and the JSON evaluation report
//                 written by `--metrics PATH`
//
// The trained model itself is never persisted: it lives exactly
// as long as the process.

/// Accuracy tracking and evaluation report output
pub mod metrics;
