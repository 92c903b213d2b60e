//! Unified path management for tick configuration and data files.
//!
//! All tick configuration and task data locations are resolved here so the
//! rest of the infrastructure layer never touches platform directory logic.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/tick/              # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/tick/         # Data directory
//! └── tasks.json               # Persisted task collection
//! ```

use std::path::{Path, PathBuf};

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for tick.
///
/// With a base directory override (used by tests and by the `data_dir`
/// config setting) both config and data resolve under that base; otherwise
/// the platform conventions apply (XDG on Linux/macOS, the appropriate
/// equivalents on Windows via the `dirs` crate).
pub struct TickPaths {
    base_dir: Option<PathBuf>,
}

impl TickPaths {
    /// Creates a TickPaths instance, optionally rooted at a custom base
    /// directory.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the tick configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/tick/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("tick"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the tick data directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/tick/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join("tick"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted task collection.
    pub fn tasks_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.data_dir()?.join("tasks.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override_roots_everything() {
        let paths = TickPaths::new(Some(Path::new("/tmp/tick-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/tick-test/config.toml")
        );
        assert_eq!(
            paths.tasks_file().unwrap(),
            PathBuf::from("/tmp/tick-test/tasks.json")
        );
    }
}
