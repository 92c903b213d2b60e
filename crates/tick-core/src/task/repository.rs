//! Task repository trait.
//!
//! Defines the interface for task persistence operations.

use super::model::Task;
use crate::error::Result;
use async_trait::async_trait;

/// An abstract repository for persisting the task collection.
///
/// This trait defines the contract for persisting and retrieving tasks,
/// decoupling the application's core logic from the specific storage
/// mechanism (e.g., a JSON file, an in-memory fake).
///
/// The whole ordered collection is the unit of persistence: `load` is called
/// once at startup and `save` after every mutating store operation, last
/// write wins.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Loads the persisted task collection.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<Task>)`: The stored tasks in collection order; empty when
    ///   nothing has been stored yet
    /// - `Err(_)`: Error occurred during retrieval
    async fn load(&self) -> Result<Vec<Task>>;

    /// Saves the full task collection, replacing the previous snapshot.
    ///
    /// # Arguments
    ///
    /// * `tasks` - The ordered collection to persist
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Tasks saved successfully
    /// - `Err(_)`: Error occurred during save
    async fn save(&self, tasks: &[Task]) -> Result<()>;
}
