// ============================================================
// Layer 6: Evaluation Metrics
// ============================================================
// Accuracy bookkeeping for a test run, plus an optional JSON
// record of it on disk.
//
// Example JSON output:
//   {
//     "config": { "train_file": "train.csv", "test_file": "test.csv" },
//     "correct": 2,
//     "total": 3,
//     "accuracy": 0.6666666666666666
//   }
//
// `accuracy` is null when the test set was empty.
//
// Why JSON next to the printed report?
//   The stdout report is meant for people. Scripts comparing runs
//   want numbers they can parse without scraping text.
//
// Reference: serde_json documentation (to_string_pretty)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

use crate::application::config::RunConfig;

/// Running tally of correct predictions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accuracy {
    pub correct: u64,
    pub total:   u64,
}

impl Accuracy {
    /// Count one prediction. `total` always moves, `correct` only on a hit.
    pub fn record(&mut self, hit: bool) {
        if hit {
            self.correct += 1;
        }
        self.total += 1;
    }

    /// correct / total, or `None` when nothing was evaluated
    pub fn ratio(&self) -> Option<f64> {
        (self.total > 0).then(|| self.correct as f64 / self.total as f64)
    }
}

/// What gets written to the metrics file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub config:   RunConfig,
    pub correct:  u64,
    pub total:    u64,
    pub accuracy: Option<f64>,
}

impl EvaluationReport {
    pub fn new(config: &RunConfig, accuracy: Accuracy) -> Self {
        Self {
            config:   config.clone(),
            correct:  accuracy.correct,
            total:    accuracy.total,
            accuracy: accuracy.ratio(),
        }
    }

    /// Write the report as pretty JSON, replacing any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Cannot create '{}'", dir.display()))?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write metrics to '{}'", path.display()))?;

        tracing::debug!("Saved evaluation metrics to '{}'", path.display());
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RunConfig {
        RunConfig {
            train_file:   "train.csv".into(),
            test_file:    Some("test.csv".into()),
            metrics_path: None,
        }
    }

    #[test]
    fn test_two_of_three() {
        let mut acc = Accuracy::default();
        for hit in [true, false, true] {
            acc.record(hit);
        }
        assert_eq!(acc, Accuracy { correct: 2, total: 3 });
        assert_eq!(acc.ratio(), Some(2.0 / 3.0));
    }

    #[test]
    fn test_empty_has_no_ratio() {
        assert_eq!(Accuracy::default().ratio(), None);
    }

    #[test]
    fn test_report_written_as_json() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("metrics.json");

        let report = EvaluationReport::new(&config(), Accuracy { correct: 1, total: 4 });
        report.save(&path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["correct"], 1);
        assert_eq!(json["total"], 4);
        assert_eq!(json["accuracy"], 0.25);
        assert_eq!(json["config"]["test_file"], "test.csv");

        let back: EvaluationReport =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, report);
    }
}
