//! In-memory task collection and its mutation rules.

use super::event::StoreEvent;
use super::model::{Filter, Stats, Task};

/// The single "currently editing" slot: which task is being edited and the
/// draft text accumulated so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditingState {
    /// Id of the task being edited
    pub id: String,
    /// Draft text, seeded with the task's current text on `start_edit`
    pub draft: String,
}

/// The central state holder for the task list.
///
/// `TaskStore` owns the ordered task collection, the current view filter and
/// the optional editing state. Mutations return an optional [`StoreEvent`]
/// describing what happened; `None` means the guarded no-op case was hit
/// (unknown id, or empty text on add/save_edit). The store itself performs
/// no IO and emits no notifications.
///
/// Ordering invariant: tasks keep insertion order, and removals preserve the
/// relative order of survivors.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    editing: Option<EditingState>,
}

impl TaskStore {
    /// Creates an empty store with the default filter (`All`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a previously persisted collection, replacing the current one.
    ///
    /// Used on startup restore. Editing state is discarded since the ids it
    /// referenced may no longer exist.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.editing = None;
    }

    /// The full collection in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The current view filter.
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The current editing state, if any task is being edited.
    pub fn editing(&self) -> Option<&EditingState> {
        self.editing.as_ref()
    }

    /// Appends a new task with the trimmed text.
    ///
    /// Refuses empty or whitespace-only text: nothing changes and `None` is
    /// returned. On success the returned event carries the stored text.
    pub fn add(&mut self, text: &str) -> Option<StoreEvent> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text);
        let event = StoreEvent::TaskAdded {
            text: task.text.clone(),
        };
        self.tasks.push(task);
        Some(event)
    }

    /// Flips `completed` for the task with the matching id.
    ///
    /// Returns whether a task matched; an unknown id is a silent no-op.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Removes the task with the matching id, preserving survivor order.
    ///
    /// The returned event carries the removed task's text; an unknown id is
    /// a silent no-op returning `None`.
    pub fn remove(&mut self, id: &str) -> Option<StoreEvent> {
        let index = self.tasks.iter().position(|t| t.id == id)?;
        let task = self.tasks.remove(index);
        Some(StoreEvent::TaskRemoved { text: task.text })
    }

    /// Enters editing mode for the task with the matching id.
    ///
    /// The draft is seeded with the task's current text. Returns whether a
    /// task matched; an unknown id leaves any existing editing state alone.
    pub fn start_edit(&mut self, id: &str) -> bool {
        match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                self.editing = Some(EditingState {
                    id: task.id.clone(),
                    draft: task.text.clone(),
                });
                true
            }
            None => false,
        }
    }

    /// Replaces the task's text with the trimmed value and exits editing mode.
    ///
    /// A whitespace-only text is refused: the task is untouched and editing
    /// mode is NOT exited, so the host can keep the edit open. An unknown id
    /// clears the editing state and returns `None`.
    pub fn save_edit(&mut self, id: &str, text: &str) -> Option<StoreEvent> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                self.editing = None;
                Some(StoreEvent::TaskUpdated {
                    text: task.text.clone(),
                })
            }
            None => {
                self.editing = None;
                None
            }
        }
    }

    /// Exits editing mode, discarding the draft.
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Removes every task with `completed == true`.
    ///
    /// Always returns the event, even when nothing was removed; the count is
    /// literal.
    pub fn clear_completed(&mut self) -> StoreEvent {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        StoreEvent::CompletedCleared {
            count: before - self.tasks.len(),
        }
    }

    /// Replaces the current view filter. Pure state change, no side effects.
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Tasks matching the current filter, in collection order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Derived counts over the collection.
    pub fn stats(&self) -> Stats {
        let total = self.tasks.len();
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        Stats {
            total,
            completed,
            pending: total - completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.add(text).unwrap();
        }
        store
    }

    fn id_of(store: &TaskStore, text: &str) -> String {
        store
            .tasks()
            .iter()
            .find(|t| t.text == text)
            .map(|t| t.id.clone())
            .unwrap()
    }

    #[test]
    fn test_add_appends_pending_task() {
        let mut store = TaskStore::new();

        let event = store.add("Buy milk");

        assert_eq!(
            event,
            Some(StoreEvent::TaskAdded {
                text: "Buy milk".to_string()
            })
        );
        assert_eq!(store.stats().total, 1);
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_add_trims_text_before_storing() {
        let mut store = TaskStore::new();

        store.add("  Walk dog  ");

        assert_eq!(store.tasks()[0].text, "Walk dog");
    }

    #[test]
    fn test_add_refuses_empty_and_whitespace_text() {
        let mut store = TaskStore::new();

        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_toggle_twice_restores_original_state() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");

        assert!(store.toggle(&id));
        assert!(store.tasks()[0].completed);
        assert!(store.toggle(&id));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = store_with(&["A"]);

        assert!(!store.toggle("no-such-id"));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn test_remove_preserves_survivor_order() {
        let mut store = store_with(&["A", "B", "C"]);
        let id = id_of(&store, "B");

        let event = store.remove(&id);

        assert_eq!(
            event,
            Some(StoreEvent::TaskRemoved {
                text: "B".to_string()
            })
        );
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["A", "C"]);
    }

    #[test]
    fn test_remove_twice_is_noop_the_second_time() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");

        assert!(store.remove(&id).is_some());
        assert!(store.remove(&id).is_none());
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_start_edit_seeds_draft_with_current_text() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");

        assert!(store.start_edit(&id));

        let editing = store.editing().unwrap();
        assert_eq!(editing.id, id);
        assert_eq!(editing.draft, "A");
    }

    #[test]
    fn test_start_edit_unknown_id_is_noop() {
        let mut store = store_with(&["A"]);

        assert!(!store.start_edit("no-such-id"));
        assert!(store.editing().is_none());
    }

    #[test]
    fn test_save_edit_replaces_text_and_exits_editing() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");
        store.start_edit(&id);

        let event = store.save_edit(&id, "  A改  ");

        assert_eq!(
            event,
            Some(StoreEvent::TaskUpdated {
                text: "A改".to_string()
            })
        );
        assert_eq!(store.tasks()[0].text, "A改");
        assert!(store.editing().is_none());
    }

    #[test]
    fn test_save_edit_with_whitespace_keeps_editing_open() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");
        store.start_edit(&id);

        assert!(store.save_edit(&id, "   ").is_none());

        assert_eq!(store.tasks()[0].text, "A");
        assert!(store.editing().is_some());
    }

    #[test]
    fn test_cancel_edit_discards_draft() {
        let mut store = store_with(&["A"]);
        let id = id_of(&store, "A");
        store.start_edit(&id);

        store.cancel_edit();

        assert!(store.editing().is_none());
        assert_eq!(store.tasks()[0].text, "A");
    }

    #[test]
    fn test_clear_completed_leaves_only_pending() {
        let mut store = store_with(&["A", "B", "C"]);
        store.toggle(&id_of(&store, "A"));
        store.toggle(&id_of(&store, "C"));

        let event = store.clear_completed();

        assert_eq!(event, StoreEvent::CompletedCleared { count: 2 });
        let stats = store.stats();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.pending, stats.total);
        assert_eq!(store.tasks()[0].text, "B");
    }

    #[test]
    fn test_clear_completed_with_nothing_to_clear_reports_zero() {
        let mut store = store_with(&["A"]);

        assert_eq!(store.clear_completed(), StoreEvent::CompletedCleared { count: 0 });
        assert_eq!(store.stats().total, 1);
    }

    #[test]
    fn test_visible_tasks_follows_filter() {
        let mut store = store_with(&["A", "B"]);
        store.set_filter(Filter::Active);

        let visible: Vec<&str> = store.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["A", "B"]);

        store.toggle(&id_of(&store, "A"));

        let visible: Vec<&str> = store.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["B"]);

        store.set_filter(Filter::Completed);
        let visible: Vec<&str> = store.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["A"]);
    }

    #[test]
    fn test_lifecycle_scenario() {
        let mut store = TaskStore::new();

        store.add("Buy milk");
        let stats = store.stats();
        assert_eq!((stats.total, stats.completed, stats.pending), (1, 0, 1));

        store.toggle(&id_of(&store, "Buy milk"));
        let stats = store.stats();
        assert_eq!((stats.total, stats.completed, stats.pending), (1, 1, 0));

        store.clear_completed();
        assert_eq!(store.stats().total, 0);
    }

    #[test]
    fn test_replace_tasks_installs_collection_and_drops_editing() {
        let mut store = store_with(&["A"]);
        store.start_edit(&id_of(&store, "A"));

        store.replace_tasks(vec![Task::new("X"), Task::new("Y")]);

        assert_eq!(store.stats().total, 2);
        assert!(store.editing().is_none());
    }
}
