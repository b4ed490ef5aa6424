use serde::Deserialize;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::time::Duration;

use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "FLIGHT_SEARCH_CONFIG";

/// Top-level configuration, read from `config.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub search: SearchConfig,
    pub log: LogConfig,
    #[serde(skip)]
    pub source_path: Option<String>,  // None when the defaults were used
}

/// Where the two datasets live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub airports_path: String,
    pub flights_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            airports_path: "data/airports.json".to_string(),
            flights_path: "data/flights-from-AMS.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub supported_origin: String,  // Searches from any other origin yield nothing
    pub result_delay_ms: u64,      // Pause before results are shown
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            supported_origin: "AMS".to_string(),
            result_delay_ms: 500,
        }
    }
}

impl SearchConfig {
    pub fn result_delay(&self) -> Duration {
        Duration::from_millis(self.result_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub directory: String,
    pub file_prefix: String,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_prefix: "flight-search.log".to_string(),
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Loads the config named by `FLIGHT_SEARCH_CONFIG` (a `.env` file is
    /// honored), falling back to `config.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let path = env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Loads a config file. A missing file yields the defaults.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let config_text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_string(),
                    source,
                })
            }
        };
        let mut config = Self::parse(&config_text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;
        config.source_path = Some(path.to_string());
        Ok(config)
    }

    /// Reports where the config came from. Call once logging is set up.
    pub fn log_source(&self) {
        match &self.source_path {
            Some(path) => info!("Loaded config from {}", path),
            None => warn!("Config file not found, using defaults"),
        }
    }

    pub fn parse(config_text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(config_text)
    }
}
