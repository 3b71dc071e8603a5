//! Logging for Wayfinder
//!
//! Installs a `tracing-subscriber` formatter, human-readable or JSON, behind
//! an `EnvFilter`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wayfinder_config::{LogFormat, TelemetryConfig};

/// Initialize logging from configuration
///
/// The filter is taken from `filter_override` (e.g. a CLI flag) if given,
/// then from `RUST_LOG`, then from the config file.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init(config: &TelemetryConfig, filter_override: Option<&str>) -> anyhow::Result<()> {
    let filter = build_filter(config, filter_override);

    let result = match config.format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_target(true);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

/// Resolve the effective filter, falling back to `info` on invalid directives
fn build_filter(config: &TelemetryConfig, filter_override: Option<&str>) -> EnvFilter {
    let directive = filter_override
        .map(str::to_owned)
        .or_else(|| std::env::var(EnvFilter::DEFAULT_ENV).ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| config.filter.clone());

    EnvFilter::try_new(&directive).unwrap_or_else(|e| {
        eprintln!("invalid log filter '{directive}': {e}, falling back to 'info'");
        EnvFilter::new("info")
    })
}
