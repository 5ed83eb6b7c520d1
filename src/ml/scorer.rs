// ============================================================
// Layer 5: Scorer
// ============================================================
// Log-probability of a token set under every trained label.
//
//   score[L] = ln(label_doc_count[L] / total_posts)
//            + Σ over t in tokens of term(L, t)
//
// term(L, t) takes the first matching tier:
//   1. t seen under L   → ln(label_word_doc_count[L][t] / label_doc_count[L])
//   2. t seen anywhere  → ln(word_doc_count[t] / total_posts)
//   3. t never seen     → ln(1 / total_posts)
//
// Only tokens present in the query contribute; absent vocabulary
// words add nothing. Every tier is a ratio of positive counts, so
// each score is finite. Long queries against sparse models can get
// very negative; that is expected.
//
// Why not Laplace (+1) smoothing?
//   Tiers 2 and 3 are the fallback this classifier has always used.
//   Swapping in add-one smoothing would change which label wins on
//   real data, so the fallback is kept exactly.
//
// Reference: McCallum & Nigam (1998), "A Comparison of Event Models
//            for Naive Bayes Text Classification"

use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};

use crate::data::tokenizer::Token;
use crate::ml::model::ModelStatistics;

/// Natural log of `numerator / denominator`, both document counts.
fn log_ratio(numerator: u64, denominator: u64) -> f64 {
    (numerator as f64 / denominator as f64).ln()
}

/// Log-prior of a label: ln(label documents / all documents)
pub fn log_prior(model: &ModelStatistics, label: &[u8]) -> f64 {
    log_ratio(model.label_doc_count(label), model.total_posts())
}

/// Contribution of one query token to one label's score.
fn token_term(model: &ModelStatistics, label: &[u8], label_docs: u64, token: &[u8]) -> f64 {
    let joint = model.label_word_doc_count(label, token);
    if joint > 0 {
        return log_ratio(joint, label_docs);
    }
    match model.word_doc_count(token) {
        Some(seen) => log_ratio(seen, model.total_posts()),
        None => log_ratio(1, model.total_posts()),
    }
}

/// Score `tokens` against every label of a trained model.
///
/// Fails if the model has not seen a single document: every ratio
/// would divide by zero.
pub fn score(model: &ModelStatistics, tokens: &BTreeSet<Token>) -> Result<BTreeMap<Vec<u8>, f64>> {
    anyhow::ensure!(
        !model.is_empty() && model.label_count() > 0,
        "cannot score against an untrained model"
    );

    let scores = model
        .labels()
        .map(|(label, label_docs)| {
            let total = tokens.iter().fold(log_prior(model, label), |acc, token| {
                acc + token_term(model, label, label_docs, token)
            });
            (label.to_vec(), total)
        })
        .collect();

    Ok(scores)
}
