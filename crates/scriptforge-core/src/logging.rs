//! Logging configuration using tracing

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to stderr so `scriptforge generate` keeps stdout clean
/// for the rendered snippet.
/// Log level is controlled by the `SCRIPTFORGE_LOG` environment variable.
///
/// # Examples
/// ```bash
/// SCRIPTFORGE_LOG=debug scriptforge serve
/// SCRIPTFORGE_LOG=trace scriptforge serve
/// ```
pub fn init() -> Result<()> {
    // Default to info, allow override via SCRIPTFORGE_LOG
    let env_filter = EnvFilter::try_from_env("SCRIPTFORGE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("scriptforge=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("ScriptForge starting");
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}
