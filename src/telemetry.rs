//! Log subscriber setup and span constructors.

use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is a no-op.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// Standardized span constructors for client observability.
pub mod spans {
    use tracing::{info_span, Span};

    /// Create a span for one server connection.
    pub fn connection(endpoint: &str) -> Span {
        info_span!("connection", endpoint = %endpoint)
    }
}
