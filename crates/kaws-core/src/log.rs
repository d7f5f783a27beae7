//! Logging system for kaws.
//!
//! Events go to stderr so that documents printed on stdout stay clean.
//! `RUST_LOG` takes precedence over the configured level.

use kaws_types::{KawsError, LogFormat, LogLevel, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with default configuration.
pub fn init_default() -> Result<()> {
    init(LogLevel::Warn, LogFormat::default())
}

/// Initialize logging at `level` in the given output format.
pub fn init(level: LogLevel, format: LogFormat) -> Result<()> {
    let filter = env_filter(level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr).with_target(false))
            .try_init(),
    };

    result.map_err(|e| KawsError::Other(format!("Failed to initialize logging: {}", e)))
}

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_directive()))
}
