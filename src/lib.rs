//! Multi-variate Bernoulli Naive Bayes text classifier.
//!
//! Learns per-label document counts from labelled posts, scores
//! unseen posts by log-probability and reports accuracy. The
//! `classifier` binary is a thin shell over [`cli`].

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod infra;
pub mod ml;
