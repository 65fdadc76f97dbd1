use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "timetrack=debug";

/// Installs the `tracing` subscriber when debug mode is on.
///
/// In normal mode the output macros print straight to the console and no
/// subscriber is needed.
pub fn init_logging() -> Result<()> {
    if !is_debug_mode() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_DIRECTIVE))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
