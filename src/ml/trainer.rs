// ============================================================
// Layer 5: Trainer
// ============================================================
// One sequential pass over the training documents. For each one:
//
//   1. tokenize the text into a set W
//   2. total_posts += 1
//   3. label_doc_count[label] += 1
//   4. for every t in W: word_doc_count[t] += 1,
//                        label_word_doc_count[label][t] += 1
//
// The Trainer owns the model while it is being built. `finish`
// consumes the Trainer and returns the frozen statistics, so no
// code path can keep mutating a model that is already scoring.

use crate::data::tokenizer::tokenize;
use crate::domain::document::Document;
use crate::ml::model::ModelStatistics;

#[derive(Debug, Default)]
pub struct Trainer {
    model: ModelStatistics,
}

impl Trainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a single document into the statistics.
    /// Returns the number of unique tokens it contributed.
    pub fn observe(&mut self, doc: &Document) -> usize {
        let tokens = tokenize(&doc.text);
        self.model.record(&doc.label, &tokens);
        tokens.len()
    }

    /// Documents observed so far
    pub fn total_posts(&self) -> u64 {
        self.model.total_posts()
    }

    /// Size of the vocabulary built so far
    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }

    /// Stop training and hand out the finished, read-only model.
    pub fn finish(self) -> ModelStatistics {
        tracing::debug!(
            "Model frozen: {} posts, {} labels, {} words",
            self.model.total_posts(),
            self.model.label_count(),
            self.model.vocabulary_size(),
        );
        self.model
    }
}

/// Train a model from an infallible sequence of documents.
pub fn train<I>(docs: I) -> ModelStatistics
where
    I: IntoIterator<Item = Document>,
{
    let mut trainer = Trainer::new();
    for doc in docs {
        trainer.observe(&doc);
    }
    trainer.finish()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_reports_unique_tokens() {
        let mut trainer = Trainer::new();
        assert_eq!(trainer.observe(&Document::new("a", "x y x")), 2);
        assert_eq!(trainer.total_posts(), 1);
        assert_eq!(trainer.vocabulary_size(), 2);
    }

    #[test]
    fn test_train_matches_incremental_observe() {
        let docs = vec![Document::new("a", "cat dog"), Document::new("b", "dog bird")];

        let mut trainer = Trainer::new();
        for doc in &docs {
            trainer.observe(doc);
        }

        assert_eq!(trainer.finish(), train(docs));
    }

    #[test]
    fn test_empty_input_gives_empty_model() {
        let model = train(Vec::new());
        assert!(model.is_empty());
        assert_eq!(model.label_count(), 0);
    }

    #[test]
    fn test_counts_grow_monotonically() {
        let mut trainer = Trainer::new();
        let mut last = 0;
        for text in ["a", "a b", "c", ""] {
            trainer.observe(&Document::new("l", text));
            assert!(trainer.total_posts() > last);
            last = trainer.total_posts();
        }
        let model = trainer.finish();
        assert_eq!(model.label_doc_count(b"l"), 4);
        assert_eq!(model.label_word_doc_count(b"l", b"a"), 2);
    }
}
