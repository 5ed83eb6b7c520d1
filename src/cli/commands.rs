// ============================================================
// Layer 1: Command Line Arguments
// ============================================================
// classifier TRAIN_FILE [TEST_FILE] [--metrics PATH]
//
//   one file   → train verbosely, print the learned parameters
//   two files  → train quietly, classify TEST_FILE, print accuracy

use clap::Parser;
use std::path::PathBuf;

use crate::application::config::RunConfig;

/// One-line usage printed on any argument error
pub const USAGE: &str = "Usage: classifier TRAIN_FILE [TEST_FILE]";

#[derive(Parser, Debug)]
#[command(
    name = "classifier",
    version,
    about = "Multi-variate Bernoulli Naive Bayes text classifier.",
    override_usage = "classifier TRAIN_FILE [TEST_FILE]"
)]
pub struct Cli {
    /// Labelled training posts: CSV with "tag" and "content" columns
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Labelled test posts to classify, same format as TRAIN_FILE
    #[arg(value_name = "TEST_FILE")]
    pub test_file: Option<PathBuf>,

    /// Also write the evaluation result as JSON to this path
    #[arg(long, value_name = "PATH", requires = "test_file")]
    pub metrics: Option<PathBuf>,
}

/// The application layer never sees clap types.
impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            train_file:   cli.train_file,
            test_file:    cli.test_file,
            metrics_path: cli.metrics,
        }
    }
}
