//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the picker works out of the box.

use crate::picker::selection::IdPolicy;
use crate::picker::Item;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_pages")]
    pub pages: Vec<Item>,
    #[serde(default)]
    pub initial_selected: Vec<String>,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            pages: default_pages(),
            initial_selected: Vec::new(),
            selection: SelectionConfig::default(),
            ui: UiConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Selection behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Ignore ids that do not belong to `pages` instead of keeping them.
    #[serde(default)]
    pub strict_ids: bool,
}

impl SelectionConfig {
    pub fn policy(&self) -> IdPolicy {
        if self.strict_ids {
            IdPolicy::Strict
        } else {
            IdPolicy::Permissive
        }
    }
}

/// UI appearance and behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_max_visible_rows")]
    pub max_visible_rows: u16,
    #[serde(default = "default_true")]
    pub exit_on_done: bool,
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible_rows: default_max_visible_rows(),
            exit_on_done: true,
            show_hints: true,
        }
    }
}

/// Diagnostic log settings. The terminal belongs to the UI, so logs go to a
/// file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_log_level(),
        }
    }
}

fn default_title() -> String {
    "All pages".to_string()
}
fn default_pages() -> Vec<Item> {
    (1..=6)
        .map(|n| Item::new(format!("p{}", n), format!("Page {}", n)))
        .collect()
}
fn default_true() -> bool {
    true
}
fn default_max_visible_rows() -> u16 {
    6
}
fn default_log_dir() -> String {
    "~/.local/share/pagepick/logs".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
