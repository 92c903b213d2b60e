//! Task list use case.
//!
//! `TaskUsecase` wires the in-memory [`TaskStore`] to an injected repository
//! and notifier. Every operation runs to completion before the next one is
//! invoked: mutate, persist the full snapshot, deliver the notification.

use std::sync::Arc;

use tick_core::error::Result;
use tick_core::notify::{Notifier, Severity};
use tick_core::task::{EditingState, Filter, Stats, StoreEvent, Task, TaskRepository, TaskStore};
use tokio::sync::RwLock;

/// Coordinates the task store with persistence and notification delivery.
///
/// There is exactly one logical owner (the current host session) mutating
/// the collection, so the `RwLock` never contends; it only makes the
/// usecase shareable across the host's handlers.
pub struct TaskUsecase {
    /// In-memory task collection and view state
    store: RwLock<TaskStore>,
    /// Persistent storage backend for the task collection
    repository: Arc<dyn TaskRepository>,
    /// Fire-and-forget delivery of user-facing messages
    notifier: Arc<dyn Notifier>,
}

impl TaskUsecase {
    /// Creates a new `TaskUsecase` instance.
    ///
    /// # Arguments
    ///
    /// * `repository` - Storage backend for the task collection
    /// * `notifier` - Sink for user-facing notifications
    pub fn new(repository: Arc<dyn TaskRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store: RwLock::new(TaskStore::new()),
            repository,
            notifier,
        }
    }

    /// Restores the persisted collection into the store.
    ///
    /// Called once at startup. A load failure is logged and the store starts
    /// empty; the next successful save overwrites whatever is on disk.
    pub async fn restore(&self) {
        match self.repository.load().await {
            Ok(tasks) => {
                tracing::debug!("restored {} task(s)", tasks.len());
                self.store.write().await.replace_tasks(tasks);
            }
            Err(e) => {
                tracing::warn!("failed to load persisted tasks, starting empty: {}", e);
            }
        }
    }

    /// Adds a task with the trimmed text.
    ///
    /// Returns `Ok(false)` without saving or notifying when the text is
    /// empty or whitespace-only.
    pub async fn add(&self, text: &str) -> Result<bool> {
        let (event, snapshot) = {
            let mut store = self.store.write().await;
            let event = store.add(text);
            (event, store.tasks().to_vec())
        };

        let Some(event) = event else {
            tracing::debug!("add refused: empty text");
            return Ok(false);
        };

        self.repository.save(&snapshot).await?;
        self.notify_event(&event);
        Ok(true)
    }

    /// Flips completion for the task with the matching id.
    ///
    /// An unknown id is a silent no-op returning `Ok(false)`; nothing is
    /// saved and nothing is notified. Toggling emits no notification even on
    /// success.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let snapshot = {
            let mut store = self.store.write().await;
            if !store.toggle(id) {
                return Ok(false);
            }
            store.tasks().to_vec()
        };

        self.repository.save(&snapshot).await?;
        Ok(true)
    }

    /// Removes the task with the matching id.
    ///
    /// An unknown id is a silent no-op returning `Ok(false)`.
    pub async fn remove(&self, id: &str) -> Result<bool> {
        let (event, snapshot) = {
            let mut store = self.store.write().await;
            let event = store.remove(id);
            (event, store.tasks().to_vec())
        };

        let Some(event) = event else {
            return Ok(false);
        };

        self.repository.save(&snapshot).await?;
        self.notify_event(&event);
        Ok(true)
    }

    /// Enters editing mode for the task with the matching id.
    ///
    /// Editing state is host-session state, not part of the persisted
    /// collection, so nothing is saved.
    pub async fn start_edit(&self, id: &str) -> bool {
        self.store.write().await.start_edit(id)
    }

    /// Saves an edit: replaces the task's text with the trimmed value.
    ///
    /// Returns `Ok(false)` when the edit was refused (empty text keeps
    /// editing mode open, unknown id drops it); nothing is saved or notified
    /// in that case.
    pub async fn save_edit(&self, id: &str, text: &str) -> Result<bool> {
        let (event, snapshot) = {
            let mut store = self.store.write().await;
            let event = store.save_edit(id, text);
            (event, store.tasks().to_vec())
        };

        let Some(event) = event else {
            return Ok(false);
        };

        self.repository.save(&snapshot).await?;
        self.notify_event(&event);
        Ok(true)
    }

    /// Exits editing mode, discarding the draft.
    pub async fn cancel_edit(&self) {
        self.store.write().await.cancel_edit();
    }

    /// Removes every completed task and returns how many were removed.
    ///
    /// The notification is emitted with the literal count, singular or
    /// plural as appropriate.
    pub async fn clear_completed(&self) -> Result<usize> {
        let (event, snapshot) = {
            let mut store = self.store.write().await;
            let event = store.clear_completed();
            (event, store.tasks().to_vec())
        };

        self.repository.save(&snapshot).await?;
        self.notify_event(&event);

        let StoreEvent::CompletedCleared { count } = event else {
            unreachable!("clear_completed only produces CompletedCleared");
        };
        Ok(count)
    }

    /// Replaces the current view filter. Pure state change: no persistence,
    /// no notification.
    pub async fn set_filter(&self, filter: Filter) {
        self.store.write().await.set_filter(filter);
    }

    /// The current view filter.
    pub async fn filter(&self) -> Filter {
        self.store.read().await.filter()
    }

    /// Tasks matching the current filter, in collection order.
    pub async fn visible_tasks(&self) -> Vec<Task> {
        self.store
            .read()
            .await
            .visible_tasks()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Derived counts over the collection.
    pub async fn stats(&self) -> Stats {
        self.store.read().await.stats()
    }

    /// The current editing state, if any.
    pub async fn editing(&self) -> Option<EditingState> {
        self.store.read().await.editing().cloned()
    }

    fn notify_event(&self, event: &StoreEvent) {
        match event {
            StoreEvent::TaskAdded { text } => {
                self.notifier.notify("Task added", text, Severity::Success);
            }
            StoreEvent::TaskRemoved { text } => {
                self.notifier.notify("Task deleted", text, Severity::Info);
            }
            StoreEvent::TaskUpdated { text } => {
                self.notifier.notify("Task updated", text, Severity::Success);
            }
            StoreEvent::CompletedCleared { count } => {
                let message = if *count == 1 {
                    "Removed 1 completed task".to_string()
                } else {
                    format!("Removed {} completed tasks", count)
                };
                self.notifier
                    .notify("Completed cleared", &message, Severity::Info);
            }
        }
    }
}
