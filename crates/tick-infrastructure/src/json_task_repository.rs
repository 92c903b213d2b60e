//! JSON-file-backed TaskRepository implementation.

use crate::paths::TickPaths;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tick_core::error::{Result, TickError};
use tick_core::task::{Task, TaskRepository};

/// Persists the task collection as a single JSON document.
///
/// The file holds the flat ordered list of records, so a save followed by a
/// load returns the same tasks in the same order:
///
/// ```text
/// ~/.local/share/tick/
/// └── tasks.json
/// ```
///
/// No versioning, no migration: the stored layout is exactly the serialized
/// `Task` records.
pub struct JsonTaskRepository {
    path: PathBuf,
}

impl JsonTaskRepository {
    /// Creates a repository backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository at the default platform location
    /// (`tasks.json` under the tick data directory).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be resolved.
    pub fn default_location() -> Result<Self> {
        let path = TickPaths::new(None)
            .tasks_file()
            .map_err(|e| TickError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    /// The file this repository reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskRepository for JsonTaskRepository {
    async fn load(&self) -> Result<Vec<Task>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no task file at {:?}, starting empty", self.path);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(TickError::data_access(format!(
                    "Failed to read task file {:?}: {}",
                    self.path, e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content)?;
        tracing::debug!("loaded {} task(s) from {:?}", tasks.len(), self.path);
        Ok(tasks)
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                TickError::data_access(format!(
                    "Failed to create data directory {:?}: {}",
                    parent, e
                ))
            })?;
        }

        let json = serde_json::to_string_pretty(tasks)?;
        tokio::fs::write(&self.path, json).await.map_err(|e| {
            TickError::data_access(format!("Failed to write task file {:?}: {}", self.path, e))
        })?;

        tracing::debug!("saved {} task(s) to {:?}", tasks.len(), self.path);
        Ok(())
    }
}
