// ============================================================
// Layer 1: CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments (clap),
// opens the input files, runs the use cases from Layer 2 and
// prints their results through `output`.
//
// Exit status:
//   0  success (including --help / --version)
//   1  bad arguments, or an input file could not be opened/read
//
// A run has two phases:
//   1. train    - verbose (every record echoed) when no test file
//                 was given, quiet otherwise
//   2. report   - list the model, or classify the test file
//
// Why open both files up front?
//   A broken TEST_FILE should fail before anything is printed, not
//   after a full training pass. Headers are checked at open time, so
//   both inputs are known to be well-formed tables before phase 1.
//
// Reference: Rust Book §12 (Building a CLI Program)
//            clap derive tutorial

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{error::ErrorKind, Parser};
use std::{
    ffi::OsString,
    io::{self, Write},
};

use crate::application::{
    config::RunConfig,
    evaluate_use_case::EvaluateUseCase,
    train_use_case::TrainUseCase,
};
use crate::data::loader::{CsvLoader, CsvSource};
use crate::domain::traits::SourceError;
use crate::infra::metrics::EvaluationReport;
use crate::ml::model::ModelStatistics;

pub use commands::{Cli, USAGE};

/// Process exit status for a successful run
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status for usage errors and unreadable input
pub const EXIT_FAILURE: u8 = 1;

/// Parse `args` (program name first), run, and return the exit status.
/// Everything meant for the user's stdout goes to `out`.
pub fn run_from<I, T, W>(args: I, out: &mut W) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli.run(out),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{err}");
            EXIT_SUCCESS
        }
        Err(err) => {
            tracing::debug!("Argument error: {err}");
            let _ = writeln!(out, "{USAGE}");
            EXIT_FAILURE
        }
    }
}

impl Cli {
    /// Run the requested mode, writing the report to `out`, and map
    /// the outcome to a process exit status.
    pub fn run<W: Write>(self, out: &mut W) -> u8 {
        let config = RunConfig::from(self);
        tracing::debug!("Run config: {:?}", config);

        match execute(&config, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(err) => {
                report_failure(&err, out);
                EXIT_FAILURE
            }
        }
    }
}

/// Input failures name the file on stdout; anything else goes to stderr.
fn report_failure<W: Write>(err: &anyhow::Error, out: &mut W) {
    tracing::error!("{err:#}");

    match err.downcast_ref::<SourceError>() {
        Some(source) => {
            let _ = writeln!(out, "Error opening file: {}", source.name);
            let _ = out.flush();
        }
        None => eprintln!("Error: {err:#}"),
    }
}

/// Open the inputs named by `config` and run it, writing the report
/// to `out`.
pub fn execute<W: Write>(config: &RunConfig, out: &mut W) -> Result<()> {
    let train_source = CsvLoader::new(&config.train_file).open()?;
    let test_source = config
        .test_file
        .as_ref()
        .map(|path| CsvLoader::new(path).open())
        .transpose()?;

    let model = train(train_source, config.verbose_training(), out)?;

    match test_source {
        Some(test_source) => evaluate(config, &model, test_source, out)?,
        None => output::write_model(out, &model)?,
    }

    out.flush()?;
    Ok(())
}

/// Phase 1. Verbose training echoes every record before the summary.
fn train<W: Write>(source: CsvSource, verbose: bool, out: &mut W) -> Result<ModelStatistics> {
    let use_case = TrainUseCase::new(source);

    let model = if verbose {
        output::write_training_header(out)?;
        use_case.execute_with(|doc| Ok(output::write_training_record(out, doc)?))?
    } else {
        use_case.execute()?
    };

    output::write_training_summary(out, &model, verbose)?;
    Ok(model)
}

/// Phase 2 with a test file: classify it and report accuracy.
fn evaluate<W: Write>(
    config:          &RunConfig,
    model:           &ModelStatistics,
    mut test_source: CsvSource,
    out:             &mut W,
) -> Result<()> {
    let evaluation = EvaluateUseCase::new(model).execute(&mut test_source)?;
    output::write_evaluation(out, &evaluation)?;

    if let Some(path) = &config.metrics_path {
        EvaluationReport::new(config, evaluation.accuracy).save(path)?;
    }

    Ok(())
}
