use serde::{Deserialize, Serialize};

/// What a store mutation changed, returned alongside the new state.
///
/// Keeping side effects out of the store means the collection logic stays
/// testable on its own; the application layer decides how an event turns
/// into persistence and notification calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A task was appended to the collection.
    TaskAdded { text: String },
    /// A task was removed from the collection.
    TaskRemoved { text: String },
    /// A task's text was replaced through the edit flow.
    TaskUpdated { text: String },
    /// Every completed task was removed; `count` is how many.
    CompletedCleared { count: usize },
}
