//! Tracing setup for the CLI.
//!
//! Logs go to stderr: stdout belongs to the interactive prompts and the
//! one-shot command output. Default level comes from the `-v` count and can
//! be overridden with the `LOG` env var.

use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

pub fn init(verbose: u8, quiet: bool) {
    let default = if quiet {
        LevelFilter::ERROR
    } else {
        level_from_verbosity(verbose)
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var("LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn level_from_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::ERROR,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
