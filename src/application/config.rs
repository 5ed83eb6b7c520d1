// ============================================================
// Layer 2: Run Configuration
// ============================================================
// Everything one invocation needs to know. The CLI converts its
// clap types into this struct, so the application layer never
// sees clap. Serialisable so it can be embedded in the metrics
// report written after an evaluation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// What a run will do, decided by how many inputs were given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Train verbosely, then list the learned parameters
    Inspect,
    /// Train quietly, then classify the test file
    Evaluate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Labelled training data
    pub train_file: PathBuf,

    /// Labelled test data; absent in inspect mode
    pub test_file: Option<PathBuf>,

    /// Where to write the evaluation metrics JSON, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn mode(&self) -> RunMode {
        match self.test_file {
            Some(_) => RunMode::Evaluate,
            None => RunMode::Inspect,
        }
    }

    /// Per-record training output is only wanted when inspecting
    pub fn verbose_training(&self) -> bool {
        self.mode() == RunMode::Inspect
    }
}
