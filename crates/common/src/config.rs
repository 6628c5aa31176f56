// Connection configuration for Item Remote

use serde::{Deserialize, Serialize};

/// Default companion host shipped with a fresh install
pub const DEFAULT_HOST: &str = "192.168.1.100";

/// Default companion API port
pub const DEFAULT_PORT: u16 = 8765;

/// Where the companion process lives and how to authenticate against it
///
/// Field names on disk follow the persisted key names (`laptop_ip`,
/// `api_port`, `auth_token`). Nothing is validated here: a bad host or port
/// shows up as a transport error on the first call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Companion hostname or IP
    #[serde(rename = "laptop_ip", default = "default_host")]
    pub host: String,
    /// Companion API port (default: 8765)
    #[serde(rename = "api_port", default = "default_port")]
    pub port: u16,
    /// Opaque bearer token, user supplied
    #[serde(default)]
    pub auth_token: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            auth_token: String::new(),
        }
    }
}

impl ConnectionConfig {
    pub fn new(host: impl Into<String>, port: u16, auth_token: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            auth_token: auth_token.into(),
        }
    }

    /// Base URL of the companion API, `http://{host}:{port}`
    ///
    /// The host is used verbatim; there is no TLS mode.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Parse a port typed into a form field, falling back to the default port
pub fn parse_port_or_default(input: &str) -> u16 {
    match input.trim().parse::<u16>() {
        Ok(0) | Err(_) => DEFAULT_PORT,
        Ok(port) => port,
    }
}
