//! postboard: a minimal blog front end
//!
//! Compose rich-text posts, send them to a post store, and render the
//! feed of stored posts. The [`composer::Composer`] holds the workflow;
//! the store and the editor are collaborators behind traits, and the
//! display is a pure projection in [`view`].

pub mod commands;
pub mod composer;
pub mod config;
pub mod content;
pub mod editor;
pub mod error;
pub mod helpers;
pub mod notify;
pub mod server;
pub mod store;
pub mod templates;
pub mod view;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Name of the configuration file in the base directory
pub const CONFIG_FILE: &str = "postboard.yml";

/// The main postboard application
#[derive(Debug, Clone)]
pub struct Postboard {
    /// Board configuration
    pub config: config::BoardConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Postboard {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::BoardConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::BoardConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create an instance with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::BoardConfig) -> Self {
        Self {
            config,
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// HTTP client for the configured post store
    pub fn http_store(&self) -> Result<store::HttpStore> {
        let timeout = Duration::from_secs(self.config.store.timeout_secs);
        Ok(store::HttpStore::new(&self.config.store_url(), timeout)?)
    }

    /// Store backing the web server: remote if configured, else in memory
    pub fn server_store(&self) -> Result<store::DynPostStore> {
        match &self.config.store.url {
            Some(url) => {
                tracing::info!("Using remote post store at {}", url);
                Ok(std::sync::Arc::new(self.http_store()?))
            }
            None => {
                tracing::info!("Using in-memory post store");
                Ok(std::sync::Arc::new(store::MemoryStore::new()))
            }
        }
    }

    /// Date style for rendering cards
    pub fn date_style(&self) -> view::DateStyle {
        view::DateStyle::from_config(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let board = Postboard::new(dir.path()).unwrap();
        assert_eq!(board.config.title, "Postboard");
        assert_eq!(board.base_dir, dir.path());
    }

    #[test]
    fn test_new_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "title: Team Notes\nstore:\n  url: http://store.local/api\n",
        )
        .unwrap();

        let board = Postboard::new(dir.path()).unwrap();
        assert_eq!(board.config.title, "Team Notes");
        assert_eq!(
            board.http_store().unwrap().base_url(),
            "http://store.local/api"
        );
    }
}
