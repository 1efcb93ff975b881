//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`
//!
//! Leptos build settings (site root, output name) come from
//! `[workspace.metadata.leptos]` via `get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid HOST: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::parse(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    fn parse(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = match host.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost(raw.to_owned()))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
