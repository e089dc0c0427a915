//! Tracing setup for the booking page crates.
//!
//! [`TracingConfig`] is shared by every host. Tests install a compact
//! `tracing-subscriber` stack through [`init_tracing`]; the browser build only
//! reads [`TracingConfig::default_level`] and hands it to its console layer.
//!
//! # Usage
//!
//! ```ignore
//! use bookings_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::for_tests())?;
//! ```

use std::str::FromStr;

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Target prefix shared by every crate of the workspace.
pub const LOG_TARGET_PREFIX: &str = "bookings";

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),

    /// Unknown level name
    #[error("unknown log level: {0}")]
    InvalidLevel(String),
}

/// Configuration for tracing initialization
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// The default log level when RUST_LOG is not set
    pub default_level: Level,
    /// Route output through the libtest capture instead of stdout
    pub test_writer: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::INFO,
            test_writer: false,
        }
    }
}

impl TracingConfig {
    /// Config for unit tests: everything at debug, captured per test.
    #[must_use]
    pub fn for_tests() -> Self {
        Self {
            default_level: Level::DEBUG,
            test_writer: true,
        }
    }

    /// Set the default log level
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.default_level = level;
        self
    }

    /// Set the default log level from its name (`"warn"`, `"DEBUG"`, ...).
    pub fn with_level_name(self, name: &str) -> Result<Self, TracingError> {
        let level =
            Level::from_str(name.trim()).map_err(|_| TracingError::InvalidLevel(name.into()))?;
        Ok(self.with_level(level))
    }

    /// The filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        format!(
            "{}={}",
            LOG_TARGET_PREFIX,
            self.default_level.as_str().to_ascii_lowercase()
        )
    }
}

/// Initialize tracing with the given configuration.
///
/// The `RUST_LOG` environment variable overrides the default level.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let layer = fmt::layer().compact();
    let layer = if config.test_writer {
        layer.with_test_writer().boxed()
    } else {
        layer.boxed()
    };

    let subscriber = tracing_subscriber::registry().with(env_filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
