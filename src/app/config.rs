use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Environment error: {0}")]
    EnvError(String),
}

/// Verbosity of the crate's own tracing output. Distinct from the domain
/// `Severity` carried by stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone, Serialize, Deserialize)]
#[command(author, version, about = "Bounded event log store and mirror inspector", long_about = None)]
#[serde(default)]
pub struct Config {
    /// Directory holding the persisted mirror slots
    #[arg(long, env = "STORAGE_DIR", default_value = "/tmp/logos-event-log")]
    pub storage_dir: PathBuf,

    /// Retained entry cap for the generic event store
    #[arg(long, env = "ADVANCED_CAP", default_value = "500")]
    pub advanced_cap: usize,

    /// Retained entry cap for the error store
    #[arg(long, env = "ERROR_CAP", default_value = "100")]
    pub error_cap: usize,

    /// Enable fire-and-forget delivery to the external sink
    #[arg(long, env = "PRODUCTION")]
    pub production: bool,

    /// External sink endpoint URL (used when --production is set)
    #[arg(long, env = "LOG_ENDPOINT", default_value = "http://localhost:9600/v1/logs")]
    pub endpoint: String,

    /// Sink request timeout in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "10")]
    pub request_timeout_secs: u64,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Configuration file path (optional)
    #[arg(long, env = "CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Write date-stamped exports of both stores into this directory
    #[arg(long, env = "EXPORT_DIR")]
    pub export_dir: Option<PathBuf>,

    /// Empty both stores and remove their mirrors
    #[arg(long)]
    pub clear: bool,

    /// Derived field (not a CLI argument)
    #[serde(skip)]
    #[arg(skip)]
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from("/tmp/logos-event-log"),
            advanced_cap: 500,
            error_cap: 100,
            production: false,
            endpoint: "http://localhost:9600/v1/logs".to_string(),
            request_timeout_secs: 10,
            log_level: LogLevel::Info,
            config_file: None,
            export_dir: None,
            clear: false,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::parse_from(args);
        config.post_process();
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // An inline TOML document takes precedence over individual variables.
        if let Ok(inline) = std::env::var("LOGOS_CONFIG") {
            return Self::from_inline_toml(&inline);
        }

        let mut config = Config::default();

        load_env_path("STORAGE_DIR", &mut config.storage_dir);
        load_env_var("ADVANCED_CAP", &mut config.advanced_cap)?;
        load_env_var("ERROR_CAP", &mut config.error_cap)?;
        load_env_var("PRODUCTION", &mut config.production)?;
        load_env_string("LOG_ENDPOINT", &mut config.endpoint);
        load_env_var("REQUEST_TIMEOUT_SECS", &mut config.request_timeout_secs)?;
        load_env_path_opt("CONFIG_FILE", &mut config.config_file);
        load_env_path_opt("EXPORT_DIR", &mut config.export_dir);

        // LogLevel requires special handling for case-insensitive parsing
        if let Ok(log_level) = std::env::var("LOG_LEVEL") {
            config.log_level = match log_level.to_lowercase().as_str() {
                "error" => LogLevel::Error,
                "warn" => LogLevel::Warn,
                "info" => LogLevel::Info,
                "debug" => LogLevel::Debug,
                "trace" => LogLevel::Trace,
                _ => {
                    return Err(ConfigError::EnvError(format!(
                        "Invalid LOG_LEVEL: {log_level}"
                    )));
                }
            };
        }

        config.post_process();
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.post_process();
        config.validate()?;
        Ok(config)
    }

    pub fn from_inline_toml(document: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(document)?;
        config.post_process();
        config.validate()?;
        Ok(config)
    }

    pub fn post_process(&mut self) {
        self.request_timeout = Duration::from_secs(self.request_timeout_secs);
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advanced_cap == 0 {
            return Err(ConfigError::InvalidConfig(
                "Advanced store cap must be greater than 0".to_string(),
            ));
        }

        if self.error_cap == 0 {
            return Err(ConfigError::InvalidConfig(
                "Error store cap must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidConfig(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        // The endpoint only matters when deliveries will actually happen.
        if self.production {
            Url::parse(&self.endpoint).map_err(|e| {
                ConfigError::InvalidUrl(format!("Invalid endpoint URL '{}': {e}", self.endpoint))
            })?;
        }

        Ok(())
    }
}

/// Helper function to load and parse an environment variable.
/// Keeps the default when the variable doesn't exist.
fn load_env_var<T>(name: &str, target: &mut T) -> Result<(), ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    if let Ok(value) = std::env::var(name) {
        *target = value
            .parse()
            .map_err(|e| ConfigError::EnvError(format!("Invalid {name}: {e}")))?;
    }
    Ok(())
}

/// Helper function to load a string environment variable.
fn load_env_string(name: &str, target: &mut String) {
    if let Ok(value) = std::env::var(name) {
        *target = value;
    }
}

/// Helper function to load a PathBuf environment variable.
fn load_env_path(name: &str, target: &mut PathBuf) {
    if let Ok(value) = std::env::var(name) {
        *target = PathBuf::from(value);
    }
}

/// Helper function to load an optional PathBuf environment variable.
fn load_env_path_opt(name: &str, target: &mut Option<PathBuf>) {
    if let Ok(value) = std::env::var(name) {
        *target = Some(PathBuf::from(value));
    }
}
