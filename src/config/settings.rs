//! TOML-based configuration for arealens.
//!
//! Supports a config file (arealens.toml) with environment variable
//! expansion in the dataset path.
//!
//! Example configuration:
//! ```toml
//! [dataset]
//! path = "${AREALENS_DATA_DIR}/realestate.csv"
//!
//! [dataset.columns]
//! area = "final location"
//! year = "year"
//! demand = "total_sales - igr"
//! price = "flat - weighted average rate"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8600
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::dataset::ColumnSpec;

/// Pattern for `${VAR}` and `$VAR` references in configured paths.
static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}|\$([A-Za-z0-9_]+)").unwrap());

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Dataset file location and column names.
    pub dataset: DatasetSettings,

    /// HTTP server binding.
    pub server: ServerSettings,
}

/// Dataset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetSettings {
    /// Path to the dataset file (supports ${ENV_VAR} expansion).
    pub path: String,

    /// Names of the well-known columns.
    pub columns: ColumnSpec,
}

impl Default for DatasetSettings {
    fn default() -> Self {
        Self {
            path: "./data/realestate.csv".to_string(),
            columns: ColumnSpec::default(),
        }
    }
}

impl DatasetSettings {
    /// The dataset path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<PathBuf, SettingsError> {
        Ok(PathBuf::from(expand_env_vars(&self.path)?))
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8600,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `AREALENS_CONFIG`
    /// 2. `./arealens.toml`
    /// 3. `~/.config/arealens/config.toml`
    ///
    /// Falls back to defaults when no config file is found.
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("AREALENS_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("arealens.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("arealens").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for caps in ENV_VAR_PATTERN.captures_iter(s) {
        let Some(whole) = caps.get(0) else { continue };
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        let value =
            env::var(name).map_err(|_| SettingsError::MissingEnvVar(name.to_string()))?;

        result.push_str(&s[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }

    result.push_str(&s[last..]);
    Ok(result)
}
