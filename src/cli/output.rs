// ============================================================
// Layer 1: Output Rendering
// ============================================================
// Every line the classifier prints to stdout is produced here.
// Functions write into any `io::Write` so the exact text can be
// checked in tests against a Vec<u8>.
//
// Floating point values use three significant digits in `%g`
// style (see `Sig3`).
//
// Labels, content and tokens are byte strings and are written back
// exactly as they were read, without any UTF-8 decoding.
//
// Reference: Rust Book §12.6 (Writing to stdout)

use std::{
    fmt,
    io::{self, Write},
};

use crate::application::evaluate_use_case::Evaluation;
use crate::domain::document::Document;
use crate::ml::{model::ModelStatistics, reporter};

/// Significant digits for every printed float
const SIGNIFICANT_DIGITS: usize = 3;

// ─── Sig3 ─────────────────────────────────────────────────────────────────────
/// Displays an `f64` with three significant digits, `%g` style:
///
///   -0.6931 → "-0.693"     -1.3863 → "-1.39"     12.0  → "12"
///   1234.5  → "1.23e+03"   0.00001 → "1e-05"      0.0  → "0"
///
/// Fixed notation is used while the decimal exponent lies in
/// [-4, 3); scientific otherwise. Trailing zeros are dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sig3(pub f64);

/// Strip trailing fractional zeros, and the point if nothing is left.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl fmt::Display for Sig3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;

        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value > 0.0 { "inf" } else { "-inf" });
        }
        if value == 0.0 {
            return f.write_str(if value.is_sign_negative() { "-0" } else { "0" });
        }

        // Rounding to the target precision first decides the exponent:
        // 999.6 rounds to 1.00e3 and must print as 1e+03.
        let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(f, "{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
        } else {
            let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
            let fixed = format!("{:.*}", decimals, value);
            f.write_str(trim_fraction(&fixed))
        }
    }
}

/// Write `parts` back to back followed by a newline.
fn write_line<W: Write>(out: &mut W, parts: &[&[u8]]) -> io::Result<()> {
    for part in parts {
        out.write_all(part)?;
    }
    out.write_all(b"\n")
}

// ─── Training ─────────────────────────────────────────────────────────────────

pub fn write_training_header<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "training data:")
}

/// One line per consumed training record (inspect mode only)
pub fn write_training_record<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    write_line(out, &[b"  label = ", &doc.label, b", content = ", &doc.text])
}

pub fn write_training_summary<W: Write>(
    out:     &mut W,
    model:   &ModelStatistics,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "trained on {} examples", model.total_posts())?;
    if verbose {
        writeln!(out, "vocabulary size = {}", model.vocabulary_size())?;
    }
    writeln!(out)
}

// ─── Model parameters ─────────────────────────────────────────────────────────

/// Priors for every class, then the likelihood of every recorded
/// (label, word) pair.
pub fn write_model<W: Write>(out: &mut W, model: &ModelStatistics) -> io::Result<()> {
    writeln!(out, "classes:")?;
    for class in reporter::classes(model) {
        let stats = format!(", {} examples, log-prior = {}", class.doc_count, Sig3(class.log_prior));
        write_line(out, &[b"  ", class.label, stats.as_bytes()])?;
    }

    writeln!(out, "classifier parameters:")?;
    for param in reporter::parameters(model) {
        let stats = format!(
            ", count = {}, log-likelihood = {}",
            param.count,
            Sig3(param.log_likelihood)
        );
        write_line(out, &[b"  ", param.label, b":", param.token, stats.as_bytes()])?;
    }

    writeln!(out)
}

// ─── Evaluation ───────────────────────────────────────────────────────────────

pub fn write_evaluation<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out, "test data:")?;
    for outcome in &evaluation.outcomes {
        let score = format!(", log-probability score = {}", Sig3(outcome.prediction.score));
        write_line(
            out,
            &[
                b"  correct = ",
                &outcome.document.label,
                b", predicted = ",
                &outcome.prediction.label,
                score.as_bytes(),
            ],
        )?;
        write_line(out, &[b"  content = ", &outcome.document.text])?;
        writeln!(out)?;
    }

    writeln!(
        out,
        "performance: {} / {} posts predicted correctly",
        evaluation.accuracy.correct, evaluation.accuracy.total
    )
}
