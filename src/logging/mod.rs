// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for structured logging
///
/// This function sets up the tracing subscriber that will receive and process
/// log events throughout the application.
///
/// The subscriber is configured with:
/// - Filtering from `RUST_LOG` when set, defaulting to `info`
/// - Output to stdout
///
/// # Errors
///
/// Returns an error if a global subscriber has already been installed.
///
/// # Examples
///
/// ```no_run
/// use quoteable_media::logging::init_subscriber;
///
/// // Initialize logging at application startup
/// init_subscriber().expect("Failed to initialize logging");
///
/// // Now you can use tracing macros throughout the application
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber() -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init()?;

    Ok(())
}
