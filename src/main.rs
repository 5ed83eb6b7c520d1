use std::{io, process::ExitCode};
use tracing_subscriber::EnvFilter;

use bernoulli_nb::cli;

fn main() -> ExitCode {
    // stdout carries the report, so logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bernoulli_nb=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    ExitCode::from(cli::run_from(std::env::args_os(), &mut out))
}
