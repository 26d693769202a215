use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable overriding the listen port.
pub const PORT_ENV: &str = "PORT";
/// Environment variable overriding the store connection string.
pub const STORE_URI_ENV: &str = "BLOGLIST_STORE_URI";

const DEFAULT_BIND: SocketAddr = SocketAddr::V4(std::net::SocketAddrV4::new(
    std::net::Ipv4Addr::LOCALHOST,
    3003,
));

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Connection string handed to `bloglist_store::connect`.
    pub store_uri: String,
    pub max_body_bytes: usize,
    /// Fallback `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND,
            store_uri: "memory://".into(),
            max_body_bytes: 1024 * 1024,
            log_level: "info".into(),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Absent keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> ServerResult<Self> {
        toml::from_str(raw).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }

    /// Apply `PORT` and `BLOGLIST_STORE_URI` overrides.
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> ServerResult<()> {
        if let Some(port) = lookup(PORT_ENV) {
            let port: u16 = port
                .trim()
                .parse()
                .map_err(|e| ServerError::Config(format!("{PORT_ENV}={port}: {e}")))?;
            self.bind_addr.set_port(port);
        }
        if let Some(uri) = lookup(STORE_URI_ENV).filter(|uri| !uri.trim().is_empty()) {
            self.store_uri = uri;
        }
        Ok(())
    }
}
