use std::net::SocketAddr;

use serde::Deserialize;
use chirpy_core::error::{ChirpyError, Result};

/// Deployment mode that unlocks destructive admin operations.
pub const DEV_PLATFORM: &str = "dev";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChirpyConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    /// Deployment mode; only [`DEV_PLATFORM`] permits `/admin/reset`.
    #[serde(default = "default_platform")]
    pub platform: String,

    #[serde(default)]
    pub database: DatabaseSection,
}

impl Default for ChirpyConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            platform: default_platform(),
            database: DatabaseSection::default(),
        }
    }
}

impl ChirpyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ChirpyError::Config(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.database.url.trim().is_empty() {
            return Err(ChirpyError::Config("database.url must not be empty".into()));
        }

        self.server.validate()?;

        Ok(())
    }

    pub fn is_dev(&self) -> bool {
        self.platform == DEV_PLATFORM
    }

    pub(crate) fn apply_env<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PLATFORM") {
            self.platform = v;
        }
        if let Some(v) = lookup("DB_URL") {
            self.database.url = v;
        }
        if let Some(v) = lookup("CHIRPY_LISTEN") {
            self.server.listen = v;
        }
        if let Some(v) = lookup("CHIRPY_ASSETS") {
            self.server.assets_root = v;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Directory served under `/app/`.
    #[serde(default = "default_assets_root")]
    pub assets_root: String,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            assets_root: default_assets_root(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            ChirpyError::Config(format!("server.listen is not a socket address ({}): {e}", self.listen))
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseSection {
    /// PostgreSQL connection string.
    #[serde(default)]
    pub url: String,
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_assets_root() -> String {
    ".".into()
}
fn default_platform() -> String {
    "prod".into()
}
