use std::{path::Path, str::FromStr, time::Duration};

use ::config::{Config, Environment, File, FileFormat};
use miette::{miette, IntoDiagnostic, Result, WrapErr};
use serde::Deserialize;

/// Prefix of the environment variables overriding the settings,
/// e.g. `TTDL_RETRIEVAL__DELAY_MS=500`
const ENV_PREFIX: &str = "TTDL";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub retrieval: RetrievalSettings,
    pub browser: BrowserSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalSettings {
    /// How long the simulated retrieval takes
    pub delay_ms: u64,
    /// Probability that the simulated retrieval fails
    pub failure_rate: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// Program used to open download links. Platform default if unset
    pub opener: Option<String>,
    /// Log the links instead of opening them
    pub dry_run: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    pub color: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: String,
}

impl Default for RetrievalSettings {
    fn default() -> Self {
        Self {
            delay_ms: 2000,
            failure_rate: 0.0,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load the settings from the optional TOML file, then from the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .into_diagnostic()
            .wrap_err("Could not read configuration sources")?
            .try_deserialize()
            .into_diagnostic()
            .wrap_err("Invalid configuration")
    }
}

impl RetrievalSettings {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl LogSettings {
    pub fn level(&self) -> Result<tracing::Level> {
        tracing::Level::from_str(&self.level)
            .map_err(|_| miette!("Invalid log level '{}'", self.level))
    }
}
