// ============================================================
// Layer 5: Reporter
// ============================================================
// Read-only view of the learned parameters. Produces plain rows;
// turning them into text is Layer 1's job.
//
// Order is lexicographic by label, then by token (the model's
// BTreeMaps iterate that way), so two runs over the same training
// file always print the same thing.

use crate::ml::{model::ModelStatistics, scorer::log_prior};

/// One trained label: how many documents carried it and its log-prior.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassSummary<'a> {
    pub label:     &'a [u8],
    pub doc_count: u64,
    pub log_prior: f64,
}

/// One recorded (label, token) pair and its log-likelihood.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSummary<'a> {
    pub label:          &'a [u8],
    pub token:          &'a [u8],
    pub count:          u64,
    pub log_likelihood: f64,
}

/// Every label of the model with its prior.
pub fn classes(model: &ModelStatistics) -> impl Iterator<Item = ClassSummary<'_>> + '_ {
    model.labels().map(move |(label, doc_count)| ClassSummary {
        label,
        doc_count,
        log_prior: log_prior(model, label),
    })
}

/// Every (label, token) pair with a recorded count.
pub fn parameters(model: &ModelStatistics) -> impl Iterator<Item = ParameterSummary<'_>> + '_ {
    model.labels().flat_map(move |(label, label_docs)| {
        model
            .label_words(label)
            .map(move |(token, count)| ParameterSummary {
                label,
                token,
                count,
                log_likelihood: (count as f64 / label_docs as f64).ln(),
            })
    })
}
