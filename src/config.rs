//! Configuration loading from TOML files.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::detector::DetectorConfig;
use crate::error::{ConfigError, Error, Result};
use crate::pricing::{ProfitConfig, SuggestionConfig};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub suggestion: SuggestionConfig,
    pub detector: DetectorConfig,
    pub profit: ProfitConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Default catalog location under the platform data directory.
fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelfwatch")
        .join("catalog.db")
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the default location if a config file exists there,
    /// otherwise fall back to defaults.
    pub fn load_default() -> Result<Self> {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("shelfwatch")
            .join("config.toml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        match self.logging.format.as_str() {
            "pretty" | "json" => {}
            other => {
                return Err(Error::Config(ConfigError::InvalidValue {
                    field: "logging.format",
                    reason: format!("expected 'pretty' or 'json', got '{other}'"),
                }))
            }
        }
        if self.detector.price_threshold.is_sign_negative()
            || self.detector.rating_threshold.is_sign_negative()
        {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "detector",
                reason: "thresholds must not be negative".into(),
            }));
        }
        if self.suggestion.floor > self.suggestion.ceiling {
            return Err(Error::Config(ConfigError::InvalidValue {
                field: "suggestion",
                reason: "floor must not exceed ceiling".into(),
            }));
        }
        Ok(())
    }

    /// Initialize the global tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}
