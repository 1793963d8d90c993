//! Logging setup built on tracing.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Initialize the tracing subscriber.
///
/// The `PKGSUM_LOG` environment variable overrides `default_level`.
/// Diagnostics go to stderr so they never interleave with result output
/// on stdout.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_env("PKGSUM_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    Registry::default()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
