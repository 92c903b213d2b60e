use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::task::Filter;

fn default_notifications() -> bool {
    true
}

/// Application configuration, stored as `config.toml` in the tick config
/// directory. Loading and saving live in the infrastructure layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Filter installed at startup
    #[serde(default)]
    pub default_filter: Filter,
    /// Whether user-facing notifications are delivered at all
    #[serde(default = "default_notifications")]
    pub notifications: bool,
    /// Overrides the platform data directory (where tasks.json lives)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            default_filter: Filter::All,
            notifications: true,
            data_dir: None,
        }
    }
}
