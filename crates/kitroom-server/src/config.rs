use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Environment variable holding the PostgreSQL connection URL.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Directory served at `/` for the browser client.
    pub client_dir: PathBuf,
    /// PostgreSQL connection URL. `None` runs the service purely in memory.
    pub database_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            client_dir: PathBuf::from("client"),
            database_url: None,
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(data: &str) -> ServerResult<Self> {
        toml::from_str(data).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    /// Override the database URL. Blank values are ignored.
    pub fn with_database_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database_url = Some(url);
        }
        self
    }

    /// Apply `DATABASE_URL` from the environment, if set.
    pub fn with_env(self) -> Self {
        let url = std::env::var(DATABASE_URL_ENV).ok();
        self.with_database_url(url)
    }

    pub fn is_persistent(&self) -> bool {
        self.database_url.is_some()
    }
}
