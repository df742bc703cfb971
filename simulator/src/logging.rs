//! Tracing setup and forwarding of watchface events.

use tracing_subscriber::EnvFilter;
use watchface_common::log::{EventLog, LogLevel};

/// Install the global subscriber. `RUST_LOG` overrides the default `info` filter.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}

/// Forward pending watchface events to tracing.
pub fn forward(log: &mut EventLog) {
    for entry in log.drain() {
        let message = entry.message.as_str();
        match entry.level {
            LogLevel::Debug => tracing::debug!(target: "watchface", "{message}"),
            LogLevel::Info => tracing::info!(target: "watchface", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "watchface", "{message}"),
            LogLevel::Error => tracing::error!(target: "watchface", "{message}"),
        }
    }
}
