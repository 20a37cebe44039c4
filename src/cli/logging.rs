//! Diagnostic logging for the command-line front end.
//!
//! Logs go to stderr so they never mix with the report on stdout. `RUST_LOG`
//! takes precedence; otherwise `--verbose` selects debug output and the
//! default is warnings only.

use tracing_subscriber::{fmt, EnvFilter};

pub fn init(verbose: bool) {
    let default_level = if verbose { "docspell=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded in another binary.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
