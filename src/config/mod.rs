use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

pub mod defaults;
pub mod duration_serde;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Headerless delimited file holding one student per row
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
    /// How long a loaded snapshot is served before the file is read again
    #[serde(default = "default_cache_ttl", with = "duration_serde::duration")]
    pub cache_ttl: Duration,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    /// Serve the previous snapshot when a reload fails instead of erroring
    #[serde(default = "default_serve_stale_on_error")]
    pub serve_stale_on_error: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Cohort label reported by the stats endpoint
    #[serde(default = "default_cohort_label")]
    pub cohort_label: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_data_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_PATH)
}

fn default_cache_ttl() -> Duration {
    DEFAULT_CACHE_TTL
}

fn default_delimiter() -> char {
    DEFAULT_DELIMITER
}

fn default_serve_stale_on_error() -> bool {
    DEFAULT_SERVE_STALE_ON_ERROR
}

fn default_cohort_label() -> String {
    DEFAULT_COHORT_LABEL.to_string()
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
            cache_ttl: default_cache_ttl(),
            delimiter: default_delimiter(),
            serve_stale_on_error: default_serve_stale_on_error(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cohort_label: default_cohort_label(),
        }
    }
}

impl DataConfig {
    /// The delimiter as the single byte the parser expects
    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            bail!(
                "data.delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            );
        }
        Ok(self.delimiter as u8)
    }
}

impl Config {
    /// Load `config_file`, writing the defaults there first if it is missing
    pub fn load_from_file(config_file: &str) -> Result<Self> {
        let config = if std::path::Path::new(&config_file).exists() {
            let contents = std::fs::read_to_string(config_file)?;
            toml::from_str(&contents)?
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config)?;
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {}", config_file);
            default_config
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.cache_ttl.is_zero() {
            bail!("data.cache_ttl must be greater than zero");
        }
        self.data.delimiter_byte()?;
        Ok(())
    }
}
