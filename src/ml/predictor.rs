// ============================================================
// Layer 5: Predictor / Label Selector
// ============================================================
// Picks the label with the strictly greatest score. On an exact
// tie the lexicographically smaller label wins. The comparison is
// explicit, so the result does not depend on the order the scores
// are visited in (BTreeMap, HashMap, Vec, ...).
//
// Ties are compared with `==`, no epsilon: scores come from the
// same deterministic log evaluations, so equal inputs give equal bits.

use anyhow::{Context, Result};

use crate::data::tokenizer::tokenize;
use crate::ml::{model::ModelStatistics, scorer::score};

/// The chosen label and its log-probability score
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: Vec<u8>,
    pub score: f64,
}

/// True when `(label, score)` should replace `best`.
fn beats(label: &[u8], score: f64, best: &Prediction) -> bool {
    score > best.score || (score == best.score && label < best.label.as_slice())
}

/// Select the best `(label, score)` pair; `None` for an empty input.
pub fn select_label<'a, I>(scores: I) -> Option<Prediction>
where
    I: IntoIterator<Item = (&'a Vec<u8>, &'a f64)>,
{
    let mut best: Option<Prediction> = None;

    for (label, &score) in scores {
        let replace = best
            .as_ref()
            .map_or(true, |current| beats(label, score, current));

        if replace {
            best = Some(Prediction {
                label: label.clone(),
                score,
            });
        }
    }

    best
}

/// Tokenize, score and select in one step.
pub fn predict(model: &ModelStatistics, text: &[u8]) -> Result<Prediction> {
    let scores = score(model, &tokenize(text))?;
    select_label(&scores).context("model produced no label scores")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::Document;
    use crate::ml::trainer::train;
    use std::collections::{BTreeMap, HashMap};

    fn pairs(entries: &[(&str, f64)]) -> Vec<(Vec<u8>, f64)> {
        entries.iter().map(|(l, s)| (l.as_bytes().to_vec(), *s)).collect()
    }

    fn select_from(entries: &[(Vec<u8>, f64)]) -> Option<Prediction> {
        select_label(entries.iter().map(|(l, s)| (l, s)))
    }

    #[test]
    fn test_highest_score_wins() {
        let entries = pairs(&[("a", -3.0), ("b", -1.5), ("c", -2.0)]);
        let best = select_from(&entries).unwrap();
        assert_eq!(best.label, b"b");
        assert_eq!(best.score, -1.5);
    }

    #[test]
    fn test_tie_goes_to_smaller_label_in_any_order() {
        let forward  = pairs(&[("apple", -2.0), ("banana", -2.0), ("cherry", -5.0)]);
        let backward: Vec<_> = forward.iter().cloned().rev().collect();

        assert_eq!(select_from(&forward).unwrap().label, b"apple");
        assert_eq!(select_from(&backward).unwrap().label, b"apple");

        let hashed: HashMap<Vec<u8>, f64> = forward.iter().cloned().collect();
        assert_eq!(select_label(&hashed).unwrap().label, b"apple");

        let ordered: BTreeMap<Vec<u8>, f64> = backward.into_iter().collect();
        assert_eq!(select_label(&ordered).unwrap().label, b"apple");
    }

    #[test]
    fn test_empty_scores_select_nothing() {
        let empty: BTreeMap<Vec<u8>, f64> = BTreeMap::new();
        assert_eq!(select_label(&empty), None);
    }

    #[test]
    fn test_predict_seen_word() {
        let model = train(vec![Document::new("a", "cat dog"), Document::new("b", "dog bird")]);
        let best  = predict(&model, b"cat").unwrap();
        assert_eq!(best.label, b"a");
        assert!((best.score - 0.5f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_predict_unseen_word_ties_alphabetically() {
        let model = train(vec![Document::new("b", "dog bird"), Document::new("a", "cat dog")]);
        let best  = predict(&model, b"fish").unwrap();
        assert_eq!(best.label, b"a");
        assert_eq!(best.score, 0.5f64.ln() + 0.5f64.ln());
    }

    #[test]
    fn test_predict_on_untrained_model_fails() {
        assert!(predict(&ModelStatistics::default(), b"cat").is_err());
    }
}
