//! Server configuration read from the environment.

use std::env;
use std::net::{AddrParseError, IpAddr, Ipv4Addr, SocketAddr};
use std::num::ParseIntError;

/// Environment variable holding the address to bind.
pub(crate) const HOST_VAR: &str = "CIPHER_WEB_HOST";
/// Environment variable holding the port to listen on.
pub(crate) const PORT_VAR: &str = "CIPHER_WEB_PORT";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 5050;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("invalid CIPHER_WEB_HOST '{value}': {source}")]
    Host {
        value: String,
        source: AddrParseError,
    },
    #[error("invalid CIPHER_WEB_PORT '{value}': {source}")]
    Port {
        value: String,
        source: ParseIntError,
    },
}

/// Where the web server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WebConfig {
    pub(crate) host: IpAddr,
    pub(crate) port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl WebConfig {
    /// Reads `CIPHER_WEB_HOST` and `CIPHER_WEB_PORT`, falling back to
    /// `0.0.0.0:5050` for whichever is unset.
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(HOST_VAR) {
            config.host = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Host { value, source })?;
        }
        if let Some(value) = lookup(PORT_VAR) {
            config.port = value
                .trim()
                .parse()
                .map_err(|source| ConfigError::Port { value, source })?;
        }
        Ok(config)
    }

    pub(crate) const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
