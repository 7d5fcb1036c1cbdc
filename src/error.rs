//! Error types for the `chartbar` crate
//!
//! The orchestration core itself raises no domain errors: malformed windows
//! are coerced, stale ticks are discarded, and outbound delivery failures are
//! logged rather than propagated. The variants here cover the crate edges
//! where a caller can actually react.

use thiserror::Error;

/// Main error type for `chartbar` operations
#[derive(Debug, Error)]
pub enum ChartBarError {
    /// The control bar event loop has exited; inbound callbacks can no longer
    /// be delivered
    #[error("control bar event loop disconnected")]
    Disconnected,

    /// Failed to install the tracing subscriber
    /// Preserves the underlying error source for full error chain transparency
    #[error("failed to initialize logging: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for `chartbar` operations
pub type Result<T> = std::result::Result<T, ChartBarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_display() {
        let error = ChartBarError::Disconnected;
        assert_eq!(error.to_string(), "control bar event loop disconnected");
    }

    #[test]
    fn test_subscriber_preserves_source() {
        use std::error::Error as _;

        let io_error = std::io::Error::other("boom");
        let error = ChartBarError::Subscriber(Box::new(io_error));
        assert!(error.to_string().contains("failed to initialize logging"));
        assert!(error.source().is_some());
    }
}
