//! Pipeline orchestrator module.
//!
//! This module wires the full audio → transcript → categorized-tasks flow
//! into an explicit two-stage state machine.
//!
//! # Architecture
//!
//! ```text
//! PipelineCommand (mpsc)
//!        │
//!        ▼
//! PipelineOrchestrator::run()  ← async tokio task
//!        │
//!        └─ ProcessAudio
//!              │
//!              ├─ Transcriber::transcribe   → Transcribing
//!              ├─ TaskExtractor::extract    → Extracting
//!              └─ ExtractionComplete        → Done
//!                 (any stage error          → Failed)
//!
//! PipelineEvent (mpsc) ──▶ caller merges results into the board
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tokio::sync::mpsc;
//! use task_organizer::config::AppConfig;
//! use task_organizer::extract::ApiExtractor;
//! use task_organizer::pipeline::{PipelineCommand, PipelineOrchestrator};
//! use task_organizer::transcribe::ApiTranscriber;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let orchestrator = PipelineOrchestrator::new(
//!         Arc::new(ApiTranscriber::from_config(&config.transcription)),
//!         Arc::new(ApiExtractor::from_config(&config.extraction)),
//!     );
//!
//!     let (command_tx, command_rx) = mpsc::channel(4);
//!     let (event_tx, mut event_rx) = mpsc::channel(16);
//!     tokio::spawn(async move { orchestrator.run(command_rx, event_tx).await });
//!
//!     command_tx
//!         .send(PipelineCommand::ProcessAudio {
//!             audio: std::fs::read("meeting.webm").unwrap(),
//!             mime_hint: "audio/webm".into(),
//!         })
//!         .await
//!         .unwrap();
//!
//!     while let Some(event) = event_rx.recv().await {
//!         println!("{event:?}");
//!     }
//! }
//! ```

pub mod runner;
pub mod state;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{PipelineCommand, PipelineError, PipelineEvent, PipelineOrchestrator};
pub use state::ProcessingState;
