//! Initialize a new board directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::CONFIG_FILE;

/// Default postboard.yml
const DEFAULT_CONFIG: &str = r#"# Postboard Configuration

# Site
title: Postboard

# Dates on post cards
## IANA timezone name, empty for UTC
timezone: ''
date_format: YYYY-MM-DD

# Post store
## Leave url empty to keep posts in memory while `postboard serve` runs
store:
  url:
  timeout_secs: 30

# Web server
server:
  ip: localhost
  port: 4000
"#;

/// Write a default configuration into the target directory
pub fn init_board(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join(CONFIG_FILE);
    if config_path.exists() {
        anyhow::bail!("File already exists: {:?}", config_path);
    }

    fs::write(&config_path, DEFAULT_CONFIG)?;
    tracing::debug!("Wrote {:?}", config_path);

    Ok(())
}
