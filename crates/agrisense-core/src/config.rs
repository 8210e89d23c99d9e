//! Configuration loading and typed config structures for the AgriSense engine.
//!
//! The configuration lives in a YAML file whose path is taken from
//! `AGRISENSE_CONFIG`. Every section and field has a default, so an empty
//! file (or no file at all) yields a working setup:
//!
//! ```yaml
//! weather:    { enabled: true, api_url: "https://api.open-meteo.com/v1/forecast", timeout_ms: 8000 }
//! server:     { host: "0.0.0.0", port: 8080 }
//! downstream: { soil_health_url: null, timeout_ms: 15000 }
//! logging:    { level: "info" }
//! calendar:   { fixed_month: null }
//! ```

use std::path::Path;
use std::time::Duration;

use agrisense_weather::WeatherConfig;
use serde::Deserialize;

use crate::calendar::Calendar;

/// Environment variable naming the YAML configuration file.
pub const CONFIG_PATH_VAR: &str = "AGRISENSE_CONFIG";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The content parsed but a value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgrisenseConfig {
    /// Live weather provider settings.
    #[serde(default)]
    pub weather: WeatherApiConfig,

    /// HTTP listener settings.
    #[serde(default)]
    pub server: HttpConfig,

    /// Soil-health inference service settings.
    #[serde(default)]
    pub downstream: DownstreamConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Month source for the seasonal estimate.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

impl AgrisenseConfig {
    /// Load configuration for the running process.
    ///
    /// Reads the file named by `AGRISENSE_CONFIG` if set, otherwise starts
    /// from defaults, then applies environment overrides:
    /// - `WEATHER_API_URL` overrides `weather.api_url`
    /// - `SOIL_HEALTH_URL` overrides `downstream.soil_health_url`
    /// - `AGRISENSE_PORT` overrides `server.port`
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(Path::new(&path)),
            Err(_) => {
                let mut config = Self::default();
                config.apply_env_overrides()?;
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Load configuration from a YAML file, then apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// Environment overrides are not applied.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("WEATHER_API_URL") {
            self.weather.api_url = val;
        }
        if let Some(val) = lookup("SOIL_HEALTH_URL") {
            self.downstream.soil_health_url = Some(val);
        }
        if let Some(val) = lookup("AGRISENSE_PORT") {
            self.server.port = val
                .parse()
                .map_err(|e| ConfigError::Invalid(format!("invalid AGRISENSE_PORT: {e}")))?;
        }
        Ok(())
    }

    /// Check value ranges that YAML typing cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "weather.timeout_ms must be positive".to_owned(),
            ));
        }
        if self.downstream.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "downstream.timeout_ms must be positive".to_owned(),
            ));
        }
        if let Some(month) = self
            .calendar
            .fixed_month
            .filter(|month| !(1..=12).contains(month))
        {
            return Err(ConfigError::Invalid(format!(
                "calendar.fixed_month must be 1-12, got {month}"
            )));
        }
        Ok(())
    }
}

/// Live weather provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WeatherApiConfig {
    /// When false, every synthesis uses the formula estimate.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Forecast endpoint URL.
    #[serde(default = "default_weather_api_url")]
    pub api_url: String,

    /// Deadline for one live fetch, in milliseconds.
    #[serde(default = "default_weather_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            api_url: default_weather_api_url(),
            timeout_ms: default_weather_timeout_ms(),
        }
    }
}

impl WeatherApiConfig {
    /// Deadline for one live fetch.
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Provider settings for the weather crate.
    pub fn provider_config(&self) -> WeatherConfig {
        WeatherConfig {
            enabled: self.enabled,
            api_url: self.api_url.clone(),
            timeout: self.timeout(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Soil-health inference service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DownstreamConfig {
    /// Base URL of the service; `None` disables forwarding.
    #[serde(default)]
    pub soil_health_url: Option<String>,

    /// Request deadline in milliseconds.
    #[serde(default = "default_downstream_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            soil_health_url: None,
            timeout_ms: default_downstream_timeout_ms(),
        }
    }
}

impl DownstreamConfig {
    /// Request deadline.
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG`
    /// is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Month source configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Pin the month (1-12) for reproducible runs; `None` uses the UTC clock.
    #[serde(default)]
    pub fixed_month: Option<u32>,
}

impl CalendarConfig {
    /// The calendar this section describes.
    pub const fn calendar(&self) -> Calendar {
        match self.fixed_month {
            Some(month) => Calendar::Fixed(month),
            None => Calendar::System,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions for serde
// ---------------------------------------------------------------------------

const fn default_true() -> bool {
    true
}

fn default_weather_api_url() -> String {
    agrisense_weather::config::DEFAULT_API_URL.to_owned()
}

const fn default_weather_timeout_ms() -> u64 {
    agrisense_weather::config::DEFAULT_TIMEOUT_MS
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8080
}

const fn default_downstream_timeout_ms() -> u64 {
    15_000
}

fn default_log_level() -> String {
    "info".to_owned()
}
