//! Task board module.
//!
//! This module provides:
//! * [`Board`] / [`Team`] / [`Task`] / [`Priority`] — the board data model.
//! * [`BoardCommand`] + [`apply`](reducer::apply) — the pure board reducer.
//! * [`Storage`] / [`FileStorage`] / [`MemoryStorage`] — durable storage
//!   boundary with the two fixed entries `"assignments"` and
//!   `"taskCompletion"`.
//! * [`BoardStore`] — board state plus one persistence write per command.
//! * [`parse_task_source`] — static task-source document → teams.
//! * [`to_csv`] — CSV export.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use task_organizer::board::{
//!     BoardCommand, BoardStore, MemoryStorage, Storage, Task, Team,
//! };
//!
//! let storage: Arc<dyn Storage> = Arc::new(MemoryStorage::new());
//! let teams = vec![Team::new("Design", vec![Task::new("Create landing page")])];
//!
//! let mut store = BoardStore::load(storage, teams, vec!["Alice".into()]);
//! store.dispatch(BoardCommand::Assign {
//!     description: "Create landing page".into(),
//!     member: "Alice".into(),
//! });
//! assert_eq!(store.board().assignee("Create landing page"), Some("Alice"));
//! ```

pub mod export;
pub mod model;
pub mod reducer;
pub mod source;
pub mod storage;
pub mod store;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use export::to_csv;
pub use model::{Board, Priority, Task, Team};
pub use reducer::{apply, BoardCommand};
pub use source::{parse_task_source, SourceError};
pub use storage::{
    FileStorage, MemoryStorage, Storage, ASSIGNMENTS_ENTRY, COMPLETION_ENTRY,
};
pub use store::BoardStore;
