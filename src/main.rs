use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use transcat::cli::{Arguments, ExitStatus};

const LOG_ENV: &str = "TRANSCAT_LOG";

fn init_tracing(verbose: bool) {
    let default_directives = if verbose { "warn,transcat=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    match transcat::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
