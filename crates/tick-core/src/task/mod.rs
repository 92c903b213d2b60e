//! Task domain module.
//!
//! This module contains all task-related domain models, the store holding
//! the in-memory collection, and the repository interface.
//!
//! # Module Structure
//!
//! - `model`: Core task domain model (`Task`, `Filter`, `Stats`)
//! - `store`: In-memory collection and mutation rules (`TaskStore`)
//! - `event`: Mutation output events (`StoreEvent`)
//! - `repository`: Repository trait for task persistence

mod event;
mod model;
mod repository;
mod store;

// Re-export public API
pub use event::StoreEvent;
pub use model::{Filter, Stats, Task};
pub use repository::TaskRepository;
pub use store::{EditingState, TaskStore};
