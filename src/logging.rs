// ============================================================================
// Logging
// Subscriber setup for binaries, benches and demos
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; without it events at `default_level` and
/// above are printed. Returns `false` if a global subscriber was already set.
pub fn init(default_level: tracing::Level) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_str().to_ascii_lowercase()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
