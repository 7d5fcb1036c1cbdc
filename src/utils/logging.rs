//! Logging system initialization
//!
//! Sets up tracing-based logging to stderr. Log level defaults to INFO but
//! can be configured via the `RUST_LOG` environment variable.

use crate::error::{ChartBarError, Result};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let subscriber = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ChartBarError::Subscriber(Box::new(e)))?;

    tracing::info!("chartbar v{} logging initialized", env!("CARGO_PKG_VERSION"));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_initialization_fails() {
        // Whichever call installs the global subscriber, the one after it
        // must report the conflict instead of panicking
        let _ = init_logging();
        let second = init_logging();
        assert!(matches!(second, Err(ChartBarError::Subscriber(_))));
    }
}
