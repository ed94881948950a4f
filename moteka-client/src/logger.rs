//! Logging Infrastructure
//!
//! Console logging setup for binaries and harnesses embedding the
//! client. Library code only emits `tracing` events; initializing a
//! subscriber is the embedder's call.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, prelude::*};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Log level seeding the filter when `RUST_LOG` is unset
/// * `json_format` - Whether to use JSON format (true for production)
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        // JSON format for production
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).init();
    } else {
        // Pretty format for development
        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).init();
    }

    Ok(())
}
