// ============================================================
// Layer 5: Model Statistics
// ============================================================
// The counters a multi-variate Bernoulli Naive Bayes model needs.
// Every count is a number of *documents*, never a number of word
// occurrences:
//
//   total_posts                documents seen
//   word_doc_count[w]          documents containing w (any label)
//   label_doc_count[l]         documents labelled l
//   label_word_doc_count[l][w] documents labelled l containing w
//
// The vocabulary is the key set of `word_doc_count`, so the two can
// never disagree.
//
// Only the Trainer can mutate a ModelStatistics (see `record`, which
// is private to the ml layer). Once `Trainer::finish` hands the value
// out, everything downstream reads it through `&ModelStatistics`.
//
// Why BTreeMap and not HashMap?
//   The reporter's output order is lexicographic by label, then by
//   token, and must be the same on every run. HashMap iteration order
//   is randomised per process. Keys are byte strings, so the order is
//   plain byte order.
//
// Reference: Rust Book §8.3 (Storing Keys with Associated Values)

use std::collections::{BTreeMap, BTreeSet};

use crate::data::tokenizer::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelStatistics {
    total_posts:          u64,
    word_doc_count:       BTreeMap<Token, u64>,
    label_doc_count:      BTreeMap<Vec<u8>, u64>,
    label_word_doc_count: BTreeMap<Vec<u8>, BTreeMap<Token, u64>>,
}

impl ModelStatistics {
    /// Fold one document (already reduced to its token set) into the counts.
    pub(super) fn record(&mut self, label: &[u8], tokens: &BTreeSet<Token>) {
        self.total_posts += 1;
        *self.label_doc_count.entry(label.to_vec()).or_default() += 1;

        let per_label = self
            .label_word_doc_count
            .entry(label.to_vec())
            .or_default();

        for token in tokens {
            *self.word_doc_count.entry(token.clone()).or_default() += 1;
            *per_label.entry(token.clone()).or_default() += 1;
        }
    }

    /// Number of training documents seen
    pub fn total_posts(&self) -> u64 {
        self.total_posts
    }

    /// True until at least one document has been recorded
    pub fn is_empty(&self) -> bool {
        self.total_posts == 0
    }

    /// Every token seen in training, in byte order
    pub fn vocabulary(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.word_doc_count.keys().map(Vec::as_slice)
    }

    pub fn vocabulary_size(&self) -> usize {
        self.word_doc_count.len()
    }

    /// Documents (across all labels) containing `token`, or `None`
    /// when the token is not in the vocabulary.
    pub fn word_doc_count(&self, token: &[u8]) -> Option<u64> {
        self.word_doc_count.get(token).copied()
    }

    /// Documents carrying `label`; 0 for an unknown label.
    pub fn label_doc_count(&self, label: &[u8]) -> u64 {
        self.label_doc_count.get(label).copied().unwrap_or(0)
    }

    /// `(label, document count)` pairs in label order
    pub fn labels(&self) -> impl Iterator<Item = (&[u8], u64)> + '_ {
        self.label_doc_count
            .iter()
            .map(|(label, &count)| (label.as_slice(), count))
    }

    pub fn label_count(&self) -> usize {
        self.label_doc_count.len()
    }

    /// Documents labelled `label` that contain `token`.
    /// An absent entry means the pair never co-occurred and reads as 0.
    pub fn label_word_doc_count(&self, label: &[u8], token: &[u8]) -> u64 {
        self.label_word_doc_count
            .get(label)
            .and_then(|words| words.get(token))
            .copied()
            .unwrap_or(0)
    }

    /// `(token, count)` pairs recorded under `label`, token order
    pub fn label_words<'a>(&'a self, label: &[u8]) -> impl Iterator<Item = (&'a [u8], u64)> + 'a {
        self.label_word_doc_count
            .get(label)
            .into_iter()
            .flat_map(|words| words.iter().map(|(w, &c)| (w.as_slice(), c)))
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tokenizer::tokenize;

    fn build(docs: &[(&str, &str)]) -> ModelStatistics {
        let mut model = ModelStatistics::default();
        for (label, text) in docs {
            model.record(label.as_bytes(), &tokenize(text.as_bytes()));
        }
        model
    }

    #[test]
    fn test_starts_empty() {
        let model = ModelStatistics::default();
        assert!(model.is_empty());
        assert_eq!(model.vocabulary_size(), 0);
        assert_eq!(model.label_count(), 0);
    }

    #[test]
    fn test_two_document_example() {
        let model = build(&[("a", "cat dog"), ("b", "dog bird")]);

        assert_eq!(model.total_posts(), 2);
        assert_eq!(
            model.vocabulary().collect::<Vec<_>>(),
            vec![&b"bird"[..], &b"cat"[..], &b"dog"[..]]
        );
        assert_eq!(
            model.labels().collect::<Vec<_>>(),
            vec![(&b"a"[..], 1), (&b"b"[..], 1)]
        );
        assert_eq!(
            model.label_words(b"a").collect::<Vec<_>>(),
            vec![(&b"cat"[..], 1), (&b"dog"[..], 1)]
        );
        assert_eq!(model.word_doc_count(b"cat"), Some(1));
        assert_eq!(model.word_doc_count(b"dog"), Some(2));
        assert_eq!(model.word_doc_count(b"bird"), Some(1));
        assert_eq!(model.word_doc_count(b"fish"), None);
        assert_eq!(model.label_word_doc_count(b"b", b"cat"), 0);
    }

    #[test]
    fn test_repeated_word_counts_once_per_document() {
        let model = build(&[("a", "spam spam spam"), ("a", "spam eggs")]);
        assert_eq!(model.label_word_doc_count(b"a", b"spam"), 2);
        assert_eq!(model.word_doc_count(b"spam"), Some(2));
    }

    #[test]
    fn test_count_invariants_hold() {
        let model = build(&[
            ("x", "a b c"),
            ("y", "a a d"),
            ("x", "b e"),
            ("z", ""),
            ("y", "c d e f"),
        ]);

        let label_total: u64 = model.labels().map(|(_, c)| c).sum();
        assert_eq!(label_total, model.total_posts());

        for (label, label_docs) in model.labels() {
            for (token, joint) in model.label_words(label) {
                assert!(joint <= label_docs);
                assert!(joint <= model.word_doc_count(token).unwrap());
            }
        }

        for token in model.vocabulary() {
            let per_label: u64 = model
                .labels()
                .map(|(label, _)| model.label_word_doc_count(label, token))
                .sum();
            assert_eq!(model.word_doc_count(token), Some(per_label));
        }
    }

    #[test]
    fn test_empty_document_still_counts_as_a_post() {
        let model = build(&[("quiet", "   ")]);
        assert_eq!(model.total_posts(), 1);
        assert_eq!(model.label_doc_count(b"quiet"), 1);
        assert_eq!(model.vocabulary_size(), 0);
    }

    #[test]
    fn test_labels_in_byte_order() {
        let mut model = ModelStatistics::default();
        model.record(b"\xe9t\xe9", &tokenize(b"x"));
        model.record(b"zebra", &tokenize(b"y"));
        model.record(b"Zebra", &tokenize(b"z"));
        let labels: Vec<_> = model.labels().map(|(l, _)| l.to_vec()).collect();
        assert_eq!(labels, vec![b"Zebra".to_vec(), b"zebra".to_vec(), b"\xe9t\xe9".to_vec()]);
    }
}
