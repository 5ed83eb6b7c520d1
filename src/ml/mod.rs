// ============================================================
// Layer 5: ML / Model Layer
// ============================================================
// The whole statistical core of the classifier. Nothing here does
// I/O; documents arrive already parsed and results leave as plain
// values.
//
//   model.rs      - ModelStatistics: per-label / per-word document counts
//   trainer.rs    - Trainer: the only writer of ModelStatistics
//   scorer.rs     - log-probability of a token set for each label
//   predictor.rs  - best-label selection with a deterministic tie-break
//   reporter.rs   - read-only dump of priors and likelihoods
//
// Data flow:
//
//   Document ──▶ Trainer ──finish()──▶ ModelStatistics (frozen)
//                                          │
//                       ┌──────────────────┼──────────────┐
//                       ▼                  ▼              ▼
//                    scorer ──▶ predictor            reporter

/// Document-count statistics for the Bernoulli model
pub mod model;

/// Single-pass trainer
pub mod trainer;

/// Per-label log-probability scoring
pub mod scorer;

/// Label selection and end-to-end prediction
pub mod predictor;

/// Learned parameter listing
pub mod reporter;
