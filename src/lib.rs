//! Task Organizer — turn a recorded conversation into an assignable task board.
//!
//! # Pipeline
//!
//! ```text
//! audio bytes ──▶ transcribe ──▶ transcript ──▶ extract ──▶ teams/tasks
//!                                                              │
//!                    persisted assignments/completion ◀──▶ board + view
//! ```
//!
//! * [`transcribe`] — speech-to-text client (multipart upload, typed errors).
//! * [`extract`] — transcript → categorized team/task structure via a
//!   generative text capability, with strict JSON parsing.
//! * [`board`] — board data model, pure command reducer, durable storage of
//!   the assignment/completion maps, task-source parsing, CSV export.
//! * [`view`] — reconciliation of fresh task data with persisted state and
//!   the member-centric views.
//! * [`pipeline`] — the explicit transcribe-then-extract state machine.
//! * [`config`] — TOML settings and platform paths.

pub mod board;
pub mod config;
pub mod extract;
pub mod pipeline;
pub mod transcribe;
pub mod view;
