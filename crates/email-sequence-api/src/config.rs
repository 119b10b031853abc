//! Configuration for the email sequence API.

use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Placeholder API key shipped as the default. Deployments must override it.
pub const DEFAULT_API_KEY: &str = "change_this_secret_key_123";

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Shared secret expected in the `x-api-key` header
    #[serde(default = "default_api_key")]
    pub api_key: SecretString,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
            server: ServerConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
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

fn default_api_key() -> SecretString {
    SecretString::new(DEFAULT_API_KEY.into())
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".into()
}

fn environment() -> config::Environment {
    config::Environment::default()
        .separator("__")
        .try_parsing(false)
}

impl Config {
    /// Load configuration from the process environment and an optional `.env` file.
    ///
    /// `API_KEY` sets the secret; nested keys use `__`, e.g. `SERVER__PORT`.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(environment())
    }

    fn from_environment(env: config::Environment) -> Result<Self> {
        config::Config::builder()
            .add_source(env)
            .build()
            .context("Failed to read configuration from environment")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Whether the shipped placeholder secret is still in use.
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key.expose_secret() == DEFAULT_API_KEY
    }
}
