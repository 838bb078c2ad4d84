//! Diagnostic logging on stderr through `log` + `env_logger`.
//!
//! Report output goes to stdout; log records never mix with it.

use log::LevelFilter;

/// Level selected by the global `-v`/`-q` flags.
#[must_use]
pub const fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let level = level_for(verbose, quiet);
    let env = env_logger::Env::default().default_filter_or(level.as_str().to_lowercase());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbose >= 2)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
