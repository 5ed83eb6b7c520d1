// ============================================================
// Layer 2: Application / Use Cases
// ============================================================
// Orchestrates the other layers into the two things a run can do:
//
//   train     - stream a DocumentSource into a Trainer and hand back
//               the frozen ModelStatistics
//   evaluate  - stream a second source through scorer + predictor
//               and count how many labels came out right
//
// Rules for this layer:
//   - No statistics code here (Layer 5)
//   - No printing here (Layer 1); progress is reported through
//     callbacks so the CLI decides what to show
//   - Works against the DocumentSource trait, never a concrete file

/// Run-wide settings derived from the command line
pub mod config;

/// The training workflow
pub mod train_use_case;

/// The test-set evaluation workflow
pub mod evaluate_use_case;
