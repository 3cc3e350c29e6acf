use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid IP address: {value:?}")]
    InvalidHost { var: &'static str, value: String },

    #[error("{var} is not a valid port: {value:?}")]
    InvalidPort { var: &'static str, value: String },
}

/// Listening address for the HTTP server.
///
/// | Env Var        | Default     |
/// |----------------|-------------|
/// | `PLANETS_HOST` | `127.0.0.1` |
/// | `PLANETS_PORT` | `3000`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("PLANETS_HOST") {
            Some(value) => parse_host("PLANETS_HOST", &value)?,
            None => default_host(),
        };

        let port = match lookup("PLANETS_PORT") {
            Some(value) => parse_port("PLANETS_PORT", &value)?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, host: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([127, 0, 0, 1])
}

fn parse_host(var: &'static str, value: &str) -> Result<IpAddr, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidHost {
        var,
        value: value.to_string(),
    })
}

fn parse_port(var: &'static str, value: &str) -> Result<u16, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidPort {
        var,
        value: value.to_string(),
    })
}
