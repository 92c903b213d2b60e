//! Loading and saving of the application configuration.

use std::path::Path;

use tick_core::config::TickConfig;
use tick_core::error::{Result, TickError};

use crate::paths::TickPaths;

/// Reads and writes `config.toml` in the tick config directory.
///
/// This service is purely responsible for the TOML round-trip; it contains
/// no application-specific fallback logic beyond "missing file means
/// defaults".
pub struct ConfigService {
    paths: TickPaths,
}

impl ConfigService {
    /// Creates a ConfigService using the default platform config location.
    pub fn new() -> Self {
        Self {
            paths: TickPaths::new(None),
        }
    }

    /// Creates a ConfigService rooted at a custom base directory (for
    /// testing).
    pub fn with_base_dir(base_dir: &Path) -> Self {
        Self {
            paths: TickPaths::new(Some(base_dir)),
        }
    }

    /// Loads the configuration from disk.
    ///
    /// # Returns
    ///
    /// - `Ok(TickConfig)`: The parsed configuration. If the file does not
    ///   exist, the config directory cannot be found, or the file is empty,
    ///   the defaults are returned.
    /// - `Err(_)`: The file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<TickConfig> {
        let config_path = match self.paths.config_file() {
            Ok(path) => path,
            Err(_) => return Ok(TickConfig::default()),
        };
        if !config_path.exists() {
            return Ok(TickConfig::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            TickError::config(format!(
                "Failed to read config file at {:?}: {}",
                config_path, e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(TickConfig::default());
        }

        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self, config: &TickConfig) -> Result<()> {
        let config_dir = self
            .paths
            .config_dir()
            .map_err(|e| TickError::config(e.to_string()))?;
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| {
                TickError::config(format!(
                    "Failed to create config directory at {:?}: {}",
                    config_dir, e
                ))
            })?;
        }

        let toml_string = toml::to_string_pretty(config)?;
        std::fs::write(config_dir.join("config.toml"), toml_string).map_err(|e| {
            TickError::config(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tick_core::task::Filter;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());

        let config = service.load().unwrap();
        assert_eq!(config, TickConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());

        let config = TickConfig {
            default_filter: Filter::Active,
            notifications: false,
            data_dir: Some(temp_dir.path().join("data")),
        };

        service.save(&config).unwrap();
        let loaded = service.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_unparseable_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "default_filter = 3").unwrap();
        let service = ConfigService::with_base_dir(temp_dir.path());

        let err = service.load().unwrap_err();
        assert!(err.is_serialization());
    }
}
