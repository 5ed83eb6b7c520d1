// ============================================================
// Layer 2: EvaluateUseCase
// ============================================================
// Classifies every document of a test source with a finished model
// and tallies accuracy:
//
//   for each test document:
//       tokens     = tokenize(text)
//       scores     = score(model, tokens)
//       prediction = select_label(scores)
//       correct   += (prediction.label == document.label)
//       total     += 1
//
// All outcomes are collected before returning, so a read error part
// way through the test file leaves the caller with nothing to print.

use anyhow::Result;

use crate::domain::{document::Document, traits::DocumentSource};
use crate::infra::metrics::Accuracy;
use crate::ml::{
    model::ModelStatistics,
    predictor::{predict, Prediction},
};

/// One classified test document
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutcome {
    pub document:   Document,
    pub prediction: Prediction,
}

impl PredictionOutcome {
    pub fn is_correct(&self) -> bool {
        self.prediction.label == self.document.label
    }
}

/// Everything an evaluation produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluation {
    pub outcomes: Vec<PredictionOutcome>,
    pub accuracy: Accuracy,
}

/// Borrows the model read-only for the whole evaluation.
pub struct EvaluateUseCase<'m> {
    model: &'m ModelStatistics,
}

impl<'m> EvaluateUseCase<'m> {
    pub fn new(model: &'m ModelStatistics) -> Self {
        Self { model }
    }

    pub fn execute<S>(&self, source: &mut S) -> Result<Evaluation>
    where
        S: DocumentSource + ?Sized,
    {
        tracing::info!("Evaluating against '{}'", source.name());

        let mut evaluation = Evaluation::default();
        for doc in source.documents() {
            let document   = doc?;
            let prediction = predict(self.model, &document.text)?;
            let outcome    = PredictionOutcome { document, prediction };

            tracing::debug!(
                "Expected '{}', predicted '{}' ({:.4})",
                String::from_utf8_lossy(&outcome.document.label),
                String::from_utf8_lossy(&outcome.prediction.label),
                outcome.prediction.score
            );

            evaluation.accuracy.record(outcome.is_correct());
            evaluation.outcomes.push(outcome);
        }

        tracing::info!(
            "{} / {} test posts predicted correctly",
            evaluation.accuracy.correct,
            evaluation.accuracy.total
        );

        Ok(evaluation)
    }
}
