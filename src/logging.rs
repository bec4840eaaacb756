//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise only warnings are shown, or this
/// crate's debug output when `verbose` is on. Installing twice is a no-op.
pub fn init(verbose: bool) {
    let fallback = if verbose { "warn,roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
