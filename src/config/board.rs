//! Board configuration (postboard.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    // Site
    pub title: String,
    pub timezone: String,
    pub date_format: String,

    // Collaborators
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Postboard".to_string(),
            timezone: String::new(),
            date_format: "YYYY-MM-DD".to_string(),

            store: StoreConfig::default(),
            server: ServerConfig::default(),

            extra: HashMap::new(),
        }
    }
}

impl BoardConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
        let config: BoardConfig =
            serde_yaml::from_str(&content).with_context(|| format!("invalid config {:?}", path))?;
        Ok(config)
    }

    /// Store URL for clients, falling back to the local server's API
    pub fn store_url(&self) -> String {
        match &self.store.url {
            Some(url) => url.clone(),
            None => format!(
                "http://{}:{}/api",
                bind_host(&self.server.ip),
                self.server.port
            ),
        }
    }
}

/// Address to bind or dial for a configured host; "localhost" is IPv4 loopback
pub fn bind_host(ip: &str) -> &str {
    if ip == "localhost" {
        "127.0.0.1"
    } else {
        ip
    }
}

/// Post store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Base URL of a remote store API; `None` means in-memory
    pub url: Option<String>,
    /// HTTP client timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
        }
    }
}

/// Web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
