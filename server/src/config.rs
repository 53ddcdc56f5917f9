//! Host configuration parsed from environment variables.
//!
//! Optional (all have defaults):
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: bind port, default `3000`
//! - `SITE_PKG_DIR`: directory served at `/pkg`; defaults to the Leptos
//!   `site_root/site_pkg_dir` pair

use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub pkg_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed host config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed host config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = match lookup("HOST") {
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::Empty { var: "HOST" }),
            Some(raw) => raw.trim().to_owned(),
            None => DEFAULT_HOST.to_owned(),
        };
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let pkg_dir = lookup("SITE_PKG_DIR")
            .map(|raw| raw.trim().to_owned())
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        Ok(Self { host, port, pkg_dir })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
