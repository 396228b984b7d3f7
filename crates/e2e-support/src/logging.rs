//! Logging setup for e2e test runs
//!
//! Initializes tracing-subscriber with a text formatter writing to stderr,
//! so diagnostics never mix with captured command output on stdout. The
//! filter level is controlled via `E2E_LOG`, falling back to the standard
//! `RUST_LOG` variable, defaulting to `info`.

use anyhow::Result;
use std::{io, sync::Once};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the logging system
///
/// Safe to call from every test; subsequent calls are no-ops.
pub fn init() -> Result<()> {
    INIT.call_once(|| {
        let filter = create_env_filter();

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .with(filter)
            .init();

        tracing::debug!("Logging initialized");
    });

    Ok(())
}

/// Create an EnvFilter based on environment variables
fn create_env_filter() -> EnvFilter {
    if let Ok(e2e_log) = std::env::var("E2E_LOG") {
        EnvFilter::try_new(&e2e_log).unwrap_or_else(|_| EnvFilter::new("info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Check if logging has been initialized
pub fn is_initialized() -> bool {
    INIT.is_completed()
}
