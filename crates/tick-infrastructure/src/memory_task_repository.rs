//! In-memory TaskRepository implementation.

use async_trait::async_trait;
use std::sync::Mutex;
use tick_core::error::Result;
use tick_core::task::{Task, TaskRepository};

/// A task repository that never touches the filesystem.
///
/// Used by tests and by hosts that want an ephemeral session; the collection
/// lives for the lifetime of the repository instance.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-seeded with tasks, as if they had been
    /// persisted by a previous session.
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn load(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn save(&self, tasks: &[Task]) -> Result<()> {
        *self.tasks.lock().unwrap() = tasks.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_preserves_order_and_flags() {
        let repo = InMemoryTaskRepository::new();
        let mut done = Task::new("B");
        done.completed = true;
        let tasks = vec![Task::new("A"), done];

        repo.save(&tasks).await.unwrap();
        let loaded = repo.load().await.unwrap();

        assert_eq!(loaded, tasks);
    }

    #[tokio::test]
    async fn test_seeded_repository_loads_seed() {
        let repo = InMemoryTaskRepository::with_tasks(vec![Task::new("seeded")]);

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "seeded");
    }
}
