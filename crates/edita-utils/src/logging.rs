//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber with default configuration
///
/// The filter comes from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize tracing with a custom default filter directive
///
/// `RUST_LOG` still wins when set. Output goes to stderr so that command
/// output on stdout stays clean.
pub fn init_tracing_with(default_directive: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
