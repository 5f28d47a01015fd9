//! Diagnostic logging to stderr.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Log level for the verbosity flags
#[must_use]
pub const fn level_for(verbose: bool, quiet: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the flags when set.
pub fn init(verbose: bool, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet).as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
