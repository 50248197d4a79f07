//! Application configuration loaded from environment variables.

use serde::{Deserialize, Deserializer};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Version string surfaced by the health check.
    #[serde(default = "default_app_version")]
    pub app_version: String,

    /// Deployment environment surfaced by the health check.
    #[serde(default = "default_environment")]
    pub environment: String,

    /// HTTP server listening port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Debug mode: raises the default log filter to debug.
    /// Only the string "true" (any case) enables it.
    #[serde(default, deserialize_with = "de_bool_lenient")]
    pub debug: bool,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,
}

fn default_app_version() -> String {
    "1.0.0".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Accept DEBUG=TRUE / True / true; anything else is false.
fn de_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.eq_ignore_ascii_case("true"))
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> crate::error::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Effective log filter directive for this configuration.
    pub fn log_filter(&self) -> String {
        if self.debug {
            "data_service=debug,info".to_string()
        } else {
            self.rust_log.clone()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_version: default_app_version(),
            environment: default_environment(),
            port: default_port(),
            debug: false,
            rust_log: default_log_level(),
        }
    }
}
