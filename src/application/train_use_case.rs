// ============================================================
// Layer 2: TrainUseCase
// ============================================================
// Streams every document of a source into the Trainer, one at a
// time, and returns the frozen model.
//
//   source.documents() ──▶ on_record(doc) ──▶ Trainer::observe(doc)
//                                                  │
//                                      finish() ◀──┘
//
// The first read error aborts training; a partially trained model
// is never returned.
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::Result;

use crate::domain::{document::Document, traits::DocumentSource};
use crate::ml::{model::ModelStatistics, trainer::Trainer};

pub struct TrainUseCase<S> {
    source: S,
}

impl<S: DocumentSource> TrainUseCase<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Train without per-record reporting
    pub fn execute(self) -> Result<ModelStatistics> {
        self.execute_with(|_| Ok(()))
    }

    /// Train, calling `on_record` for each document before it is
    /// folded into the model. An error from the callback aborts too.
    pub fn execute_with<F>(mut self, mut on_record: F) -> Result<ModelStatistics>
    where
        F: FnMut(&Document) -> Result<()>,
    {
        tracing::info!("Training on '{}'", self.source.name());

        let mut trainer = Trainer::new();
        for doc in self.source.documents() {
            let doc = doc?;
            on_record(&doc)?;

            let unique = trainer.observe(&doc);
            tracing::debug!(
                "Post {}: label '{}', {} unique words",
                trainer.total_posts(),
                String::from_utf8_lossy(&doc.label),
                unique
            );
        }

        tracing::info!(
            "Trained on {} posts, vocabulary of {} words",
            trainer.total_posts(),
            trainer.vocabulary_size()
        );

        Ok(trainer.finish())
    }
}
