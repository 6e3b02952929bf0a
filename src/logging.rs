// Logging setup: a `tracing` fmt subscriber on stderr so stdout stays
// reserved for the form itself.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset. Warnings only, so prompts
/// are not interleaved with log lines.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
