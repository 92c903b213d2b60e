//! User-facing notification contract.
//!
//! The store and the application layer never render notifications
//! themselves; they hand them to a [`Notifier`] implementation supplied by
//! the host (a console printer in the REPL, a no-op in tests).

use serde::{Deserialize, Serialize};

/// How prominently the host should present a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Success,
    Warning,
}

/// Fire-and-forget delivery of user-facing messages.
///
/// No return value is observed, there is no retry, and delivery has no
/// effect on task state.
pub trait Notifier: Send + Sync {
    /// Presents a notification to the user.
    ///
    /// # Arguments
    ///
    /// * `title` - Short heading, e.g. "Task added"
    /// * `message` - Body text, e.g. the task's literal text
    /// * `severity` - Presentation hint
    fn notify(&self, title: &str, message: &str, severity: Severity);
}

/// Default implementation that swallows every notification.
///
/// Suitable for tests and for hosts that disable notifications in config.
#[derive(Debug, Clone, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _title: &str, _message: &str, _severity: Severity) {}
}
