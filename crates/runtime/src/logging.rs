//! Tracing subscriber setup for hosts without their own.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Installs a stderr fmt subscriber filtered by `RUST_LOG`, with `level` as
/// the floor directive.
///
/// Returns false if a global subscriber was already installed; calling this
/// more than once is harmless.
pub fn init(level: Level) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging initialized at {}", level);
    }
    installed
}
