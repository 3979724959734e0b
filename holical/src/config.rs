//! Configuration loading.
//!
//! Configuration comes from a TOML file. The path is taken from the command
//! line, then from `HOLICAL_CONFIG`, then defaults to `holical.toml`; a
//! missing file yields the defaults. `PUBLIC_DATA_API_KEY` overrides the
//! configured service key.
//!
//! ```toml
//! [source]
//! api_key = "..."
//! timeout_secs = 10
//!
//! [period]
//! max_steps = 7
//! min_length = 3
//!
//! [display]
//! language = "en"
//!
//! [log]
//! level = "debug"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use hc_engine::{Language, PeriodRules};
use hc_source::DEFAULT_ENDPOINT;

/// Config file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "holical.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "HOLICAL_CONFIG";

/// Environment variable holding the public-data service key.
pub const API_KEY_ENV: &str = "PUBLIC_DATA_API_KEY";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file is not valid TOML for this configuration.
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// A value is out of its allowed range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Data source settings.
    #[serde(default)]
    pub source: SourceConfig,

    /// Long-weekend detection settings.
    #[serde(default)]
    pub period: PeriodRules,

    /// Display settings.
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
}

/// Data source settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Service key of the public-data portal. Without one, the backup is
    /// used for every request.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Base URL of the special-day service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Backup file; the bundled backup when unset.
    #[serde(default)]
    pub backup_path: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `numOfRows` request parameter.
    #[serde(default = "default_rows_per_page")]
    pub rows_per_page: u32,
}

/// Display settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Display language.
    #[serde(default)]
    pub language: Language,

    /// Directory holding `major-events-ko.json` and `major-events-en.json`;
    /// the bundled events when unset.
    #[serde(default)]
    pub events_dir: Option<PathBuf>,

    /// Extra holiday-name table merged over the built-in one.
    #[serde(default)]
    pub names_path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LogConfig {
    /// Default log filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_rows_per_page() -> u32 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            backup_path: None,
            timeout_secs: default_timeout_secs(),
            rows_per_page: default_rows_per_page(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. A missing file yields defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load from the resolved path and apply environment overrides.
    pub fn load(cli_path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let mut config = Self::from_file(resolve_path(cli_path, env_path))?;
        config.override_api_key(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Replace the configured service key with `key` when it is non-empty.
    pub fn override_api_key(&mut self, key: Option<String>) {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.source.api_key = Some(key);
        }
    }

    /// The service key, if a non-empty one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.source
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.period.max_steps == 0 {
            return Err(ConfigError::Invalid("period.max_steps must be at least 1".into()));
        }
        if self.period.min_length < 2 {
            return Err(ConfigError::Invalid("period.min_length must be at least 2".into()));
        }
        if self.source.timeout_secs == 0 {
            return Err(ConfigError::Invalid("source.timeout_secs must be positive".into()));
        }
        if self.source.rows_per_page == 0 {
            return Err(ConfigError::Invalid("source.rows_per_page must be positive".into()));
        }
        Ok(())
    }
}

/// Pick the config path: command line, then environment, then default.
pub fn resolve_path(cli_path: Option<&Path>, env_path: Option<PathBuf>) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .or(env_path)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}
