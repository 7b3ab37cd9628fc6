//! Dashboard settings.
//!
//! Settings are layered, later sources winning:
//!
//! 1. Built-in defaults
//! 2. An optional config file (format inferred from its extension)
//! 3. `POSTURE_WATCH_*` environment variables
//! 4. Command-line flags, applied by the binary
//!
//! ```toml
//! endpoint = "http://127.0.0.1:5000"
//! path = "/data"
//! interval = "1s"
//! request_timeout = "3s"
//! log_filter = "posture_watch=debug"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::duration::parse_duration;
use crate::source::DEFAULT_DATA_PATH;

/// Prefix for environment overrides, e.g. `POSTURE_WATCH_ENDPOINT`.
pub const ENV_PREFIX: &str = "POSTURE_WATCH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the posture monitor.
    pub endpoint: String,
    /// Path of the status endpoint.
    pub path: String,
    /// Time between polls.
    pub interval: String,
    /// Per-request timeout; none by default.
    pub request_timeout: Option<String>,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000".to_string(),
            path: DEFAULT_DATA_PATH.to_string(),
            interval: "1s".to_string(),
            request_timeout: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from defaults, an optional file, and the environment.
    ///
    /// Values are not checked here; call [`Settings::validate`] once any
    /// command-line overrides have been applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let config = builder.add_source(env).build()?;

        config
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Check that the settings are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            bail!("Endpoint must be an http:// or https:// URL: {}", self.endpoint);
        }
        self.interval()?;
        self.request_timeout()?;
        Ok(())
    }

    /// The poll interval. Zero is rejected.
    pub fn interval(&self) -> Result<Duration> {
        let interval = parse_duration(&self.interval)
            .with_context(|| format!("Invalid interval: {}", self.interval))?;
        if interval.is_zero() {
            bail!("Interval must be greater than zero");
        }
        Ok(interval)
    }

    /// The per-request timeout, if one is set.
    pub fn request_timeout(&self) -> Result<Option<Duration>> {
        self.request_timeout
            .as_deref()
            .map(|t| parse_duration(t).with_context(|| format!("Invalid request timeout: {}", t)))
            .transpose()
    }
}
