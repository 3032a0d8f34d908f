//! Server configuration.
//!
//! Values come from the process environment, which `main` first populates
//! from a `.env` file when one exists.

use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Errors while reading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got {value:?}")]
    InvalidPort { value: String },
}

/// Where the HTTP server binds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// `APP_HOST`, default `127.0.0.1`.
    pub host: String,
    /// `APP_PORT`, default `8080`.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("APP_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("APP_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_addr(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
