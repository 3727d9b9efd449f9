use std::{env, io};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod exit_status;
mod inputs;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use inputs::collect_files;
pub use run::{FileParseFailure, RunResult, run};

/// Install the stderr log subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("extract_locales={}", default_level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .try_init();
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_logging(args.verbose);

    let result = run::run(&args)?;
    report::print(&result, args.verbose);

    Ok(result.exit_status())
}
