pub mod model;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "PAGEPICK_CONFIG";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page #{index} has an empty id")]
    EmptyId { index: usize },
    #[error("duplicate page id {id:?}")]
    DuplicateId { id: String },
    #[error("ui.max_visible_rows must be at least 1")]
    NoVisibleRows,
}

fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pagepick")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    validate(&config).with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Reject page lists the picker cannot key rows by.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (index, page) in config.pages.iter().enumerate() {
        if page.id.is_empty() {
            return Err(ConfigError::EmptyId { index });
        }
        if !seen.insert(page.id.as_str()) {
            return Err(ConfigError::DuplicateId {
                id: page.id.clone(),
            });
        }
    }
    if config.ui.max_visible_rows == 0 {
        return Err(ConfigError::NoVisibleRows);
    }
    Ok(())
}

/// Expand a leading `~` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
