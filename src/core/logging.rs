//! Logging initialization
//!
//! The crate logs through the `log` facade; records are bridged into
//! `tracing` and rendered by a fmt subscriber. `RUST_LOG` controls the
//! filter, defaulting to `info`.

use anyhow::Result;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Initialize the log-to-tracing bridge and the fmt subscriber.
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - A global logger or subscriber was already set
pub fn init_logging() -> Result<()> {
    LogTracer::init()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
