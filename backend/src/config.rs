//! Dashboard configuration.
//!
//! Configuration is resolved once at startup from, in increasing precedence:
//!
//! 1. built-in defaults (the API base URL may be baked in at build time via
//!    the `AUDIENCE_API_BASE` environment variable seen by the compiler),
//! 2. a `dashboard.toml` file,
//! 3. runtime environment variables.
//!
//! The result is handed to [`crate::client::ApiClient::new`] and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::AvgMode;
use crate::services::smoothing::DEFAULT_WINDOW;

/// API base URL baked in at build time, if any.
pub const DEFAULT_API_BASE: &str = match option_env!("AUDIENCE_API_BASE") {
    Some(base) => base,
    None => "http://localhost:8000",
};

/// Default number of days requested from the trend endpoint.
pub const DEFAULT_TREND_DAYS: u32 = 30;

/// Configuration file name searched by [`DashboardConfig::from_default_location`].
pub const CONFIG_FILE_NAME: &str = "dashboard.toml";

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Settings the API client is constructed from.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` leaves timeouts to the transport.
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Full configuration file layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub trend: TrendSettings,
}

/// Upstream API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Bind address of the HTTP server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Defaults for trend views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSettings {
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_trend_days")]
    pub days: u32,
    #[serde(default)]
    pub mode: AvgMode,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_user_agent() -> String {
    concat!("audience-dash/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_trend_days() -> u32 {
    DEFAULT_TREND_DAYS
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for TrendSettings {
    fn default() -> Self {
        Self {
            window: default_window(),
            days: default_trend_days(),
            mode: AvgMode::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration from the first `dashboard.toml` found in:
    /// 1. the current directory
    /// 2. `backend/`
    /// 3. the parent directory
    ///
    /// Returns `Ok(None)` when no file exists.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Resolve the effective configuration: file (explicit or searched),
    /// then environment overrides, then validation.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_default_location()?.unwrap_or_default(),
        };
        config.apply_env_from(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup.
    ///
    /// # Variables
    /// - `AUDIENCE_API_BASE`: upstream API base URL
    /// - `AUDIENCE_API_TIMEOUT_SECS`: request timeout in seconds
    /// - `HOST`, `PORT`: server bind address
    /// - `AUDIENCE_TREND_WINDOW`: moving-average window
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup("AUDIENCE_API_BASE") {
            self.api.base_url = base_url;
        }
        if let Some(timeout) = lookup("AUDIENCE_API_TIMEOUT_SECS") {
            let secs = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                key: "AUDIENCE_API_TIMEOUT_SECS".to_string(),
                message: format!("'{}' is not a number of seconds", timeout),
            })?;
            self.api.request_timeout_secs = Some(secs);
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{}' is not a valid port number", port),
            })?;
        }
        if let Some(window) = lookup("AUDIENCE_TREND_WINDOW") {
            self.trend.window = window.parse().map_err(|_| ConfigError::InvalidValue {
                key: "AUDIENCE_TREND_WINDOW".to_string(),
                message: format!("'{}' is not a positive integer", window),
            })?;
        }
        Ok(())
    }

    /// Reject values no component can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "api.base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.trend.window == 0 {
            return Err(ConfigError::InvalidValue {
                key: "trend.window".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.trend.days == 0 {
            return Err(ConfigError::InvalidValue {
                key: "trend.days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Client settings derived from the `[api]` table.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            request_timeout: self.api.request_timeout_secs.map(Duration::from_secs),
            user_agent: self.api.user_agent.clone(),
        }
    }

    /// `host:port` string for the HTTP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
