//! Diagnostic tracing for the demonstration.
//!
//! The containers emit `trace`/`debug` events while folding step lists.
//! Nothing is printed unless a subscriber is installed; results go to
//! stdout and diagnostics to stderr.

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber, filtered by `RUST_LOG`.
///
/// The filter falls back to `warn` when `RUST_LOG` is unset or unparsable.
/// Only one global subscriber can exist per process, so a second call returns
/// `TryInitError` and leaves the first subscriber in place.
///
/// # Example
/// ```bash
/// RUST_LOG=monad_patterns=trace cargo run --example monad_walkthrough
/// ```
pub fn init() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init()
}
