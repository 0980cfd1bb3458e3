//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` directives take priority; `default_level` applies when it is
/// unset. `format` is `text` or `json` (anything else falls back to text).
/// Output goes to stderr so the CLI can keep stdout for results.
pub fn init(default_level: &str, format: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
