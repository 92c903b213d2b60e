//! Task domain model.
//!
//! This module contains the core `Task` entity plus the `Filter` view
//! selector and the derived `Stats` counts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task list entry.
///
/// This is the "pure" domain model that business logic operates on,
/// independent of any specific storage format. The persisted layout is the
/// same three fields, serialized as a flat list in collection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (UUID format), immutable once created
    pub id: String,
    /// The task text (non-empty after trim)
    pub text: String,
    /// Whether the task has been completed
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates a new task with a fresh unique id and `completed == false`.
    ///
    /// The caller is responsible for trimming; `TaskStore::add` does so
    /// before constructing the task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
        }
    }
}

/// A view selector over the task collection.
///
/// Selecting a filter never mutates the underlying collection; it only
/// changes what `TaskStore::visible_tasks` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// Every task, regardless of completion state.
    #[default]
    All,
    /// Tasks with `completed == false`.
    Active,
    /// Tasks with `completed == true`.
    Completed,
}

impl Filter {
    /// Whether a task matches this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!("unknown filter: {}", other)),
        }
    }
}

/// Derived counts over the current task collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of tasks in the collection
    pub total: usize,
    /// Number of tasks with `completed == true`
    pub completed: usize,
    /// `total - completed`
    pub pending: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("Buy milk");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
    }

    #[test]
    fn test_new_tasks_have_unique_ids() {
        let a = Task::new("A");
        let b = Task::new("B");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_filter_matches() {
        let mut task = Task::new("A");
        assert!(Filter::All.matches(&task));
        assert!(Filter::Active.matches(&task));
        assert!(!Filter::Completed.matches(&task));

        task.completed = true;
        assert!(Filter::All.matches(&task));
        assert!(!Filter::Active.matches(&task));
        assert!(Filter::Completed.matches(&task));
    }

    #[test]
    fn test_filter_round_trips_through_display_and_from_str() {
        for filter in [Filter::All, Filter::Active, Filter::Completed] {
            let parsed: Filter = filter.to_string().parse().unwrap();
            assert_eq!(parsed, filter);
        }
        assert!("done".parse::<Filter>().is_err());
    }

    #[test]
    fn test_task_deserializes_without_completed_field() {
        // Records written before a task was ever toggled may omit the flag.
        let task: Task = serde_json::from_str(r#"{"id":"1718200000000","text":"Old"}"#).unwrap();
        assert!(!task.completed);
        assert_eq!(task.id, "1718200000000");
    }
}
