//! Host configuration parsed from environment variables.
//!
//! - `PORT`: listen port, default `3000`
//! - `INKPOST_API_BASE_URL`: remote CMS API address handed to the browser,
//!   default `http://localhost:8000`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use client::config::{ApiConfig, DEFAULT_API_BASE_URL};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}")]
    InvalidPort { value: String },
    #[error("INKPOST_API_BASE_URL is set but empty")]
    EmptyApiBase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub api_base_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let api_base_url = match lookup("INKPOST_API_BASE_URL") {
            Some(raw) => {
                let trimmed = raw.trim().trim_end_matches('/');
                if trimmed.is_empty() {
                    return Err(ConfigError::EmptyApiBase);
                }
                trimmed.to_owned()
            }
            None => DEFAULT_API_BASE_URL.to_owned(),
        };
        Ok(Self { port, api_base_url })
    }

    /// Context value rendered into the HTML shell.
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(&self.api_base_url)
    }
}
