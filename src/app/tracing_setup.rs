//! Tracing subscriber setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays parseable.

use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Map `-q` / `-v` flags onto a level for this crate.
pub fn level_for(quiet: bool, verbose: u8) -> LevelFilter {
    if quiet {
        return LevelFilter::WARN;
    }
    match verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Build the filter. `RUST_LOG` wins over the CLI flags when set.
pub fn build_filter(level: LevelFilter) -> EnvFilter {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)),
    }
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init_global(level: LevelFilter) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry().with(fmt_layer).with(build_filter(level)).try_init();
}
