//! Board view module.
//!
//! [`BoardController`] reconciles freshly loaded categorized tasks with the
//! persisted assignment/completion state and exposes the member-centric view
//! plus all user-initiated mutations (assign, toggle, drag-and-drop, roster
//! edits).

pub mod controller;

pub use controller::{BoardController, DragPayload};
