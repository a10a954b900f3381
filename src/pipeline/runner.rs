//! Pipeline orchestrator — drives the audio → transcript → tasks flow.
//!
//! [`PipelineOrchestrator`] owns the provider handles and responds to
//! [`PipelineCommand`]s received over a `tokio::sync::mpsc` channel, emitting
//! [`PipelineEvent`]s back to the caller.
//!
//! # Pipeline flow
//!
//! ```text
//! PipelineCommand::ProcessAudio { audio, mime_hint }
//!   └─▶ Transcriber::transcribe (async)          [Transcribing]
//!         ├─ Err → PipelineEvent::Error           [Failed]
//!         └─ Ok  → TranscriptionComplete
//!               └─▶ TaskExtractor::extract (async) [Extracting]
//!                     ├─ Err → PipelineEvent::Error [Failed]
//!                     └─ Ok  → ExtractionComplete   [Done]
//! ```
//!
//! The two stages are strictly sequential: at most one transcription and one
//! extraction call are in flight per processing request, and extraction
//! never starts before transcription resolves.  There is no cancellation —
//! once a call is issued, the only outcome is success or failure.  No error
//! is retried transparently.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::extract::{ExtractError, ExtractionResult, TaskExtractor};
use crate::transcribe::{TranscribeError, Transcriber};

use super::state::ProcessingState;

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that end a processing run.
///
/// Both variants are terminal for the current attempt and must be surfaced
/// as a user-visible error state; a new run requires a new request.
#[derive(Debug)]
pub enum PipelineError {
    /// The speech-to-text provider rejected or errored on the audio payload.
    Transcription(TranscribeError),
    /// The generation output was unusable (transport, empty, or parse).
    Extraction(ExtractError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Transcription(e) => write!(f, "Transcription failed: {e}"),
            PipelineError::Extraction(e) => write!(f, "Task extraction failed: {e}"),
        }
    }
}

impl std::error::Error for PipelineError {}

// ---------------------------------------------------------------------------
// Pipeline message types
// ---------------------------------------------------------------------------

/// Commands sent to the pipeline orchestrator.
#[derive(Debug, Clone)]
pub enum PipelineCommand {
    /// Process one recorded or uploaded conversation.
    ProcessAudio {
        /// Raw audio payload, passed to the provider unchanged.
        audio: Vec<u8>,
        /// MIME type of the payload (e.g. `"audio/webm"`).
        mime_hint: String,
    },
}

/// Progress events delivered from the pipeline to the caller.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    /// The pipeline entered a new state.
    StateChanged { state: ProcessingState },
    /// Speech-to-text completed.
    TranscriptionComplete { transcript: String },
    /// Extraction completed; the transcript is retained alongside the result
    /// so callers can display both.
    ExtractionComplete {
        transcript: String,
        result: ExtractionResult,
    },
    /// The run failed at some stage.
    Error { message: String },
}

// ---------------------------------------------------------------------------
// PipelineOrchestrator
// ---------------------------------------------------------------------------

/// Drives the complete conversation-processing pipeline.
///
/// Create with [`PipelineOrchestrator::new`], then call [`run`](Self::run)
/// inside a tokio task, or [`process`](Self::process) directly for a
/// one-shot flow without channels.
pub struct PipelineOrchestrator {
    transcriber: Arc<dyn Transcriber>,
    extractor: Arc<dyn TaskExtractor>,
}

impl PipelineOrchestrator {
    /// Create a new orchestrator.
    ///
    /// # Arguments
    ///
    /// * `transcriber` — speech-to-text backend (e.g. `ApiTranscriber`).
    /// * `extractor`   — task extraction backend (e.g. `ApiExtractor`).
    pub fn new(transcriber: Arc<dyn Transcriber>, extractor: Arc<dyn TaskExtractor>) -> Self {
        Self {
            transcriber,
            extractor,
        }
    }

    // -----------------------------------------------------------------------
    // One-shot processing
    // -----------------------------------------------------------------------

    /// Run the two stages sequentially for a single audio payload.
    pub async fn process(
        &self,
        audio: &[u8],
        mime_hint: &str,
    ) -> Result<(String, ExtractionResult), PipelineError> {
        log::debug!(
            "pipeline: transcribing {} byte(s) ({mime_hint})",
            audio.len()
        );
        let transcript = self
            .transcriber
            .transcribe(audio, mime_hint)
            .await
            .map_err(PipelineError::Transcription)?;

        log::debug!("pipeline: transcript length = {}", transcript.len());

        let result = self
            .extractor
            .extract(&transcript)
            .await
            .map_err(PipelineError::Extraction)?;

        log::debug!("pipeline: extracted {} team(s)", result.teams.len());
        Ok((transcript, result))
    }

    // -----------------------------------------------------------------------
    // Main async loop
    // -----------------------------------------------------------------------

    /// Run the orchestrator until `command_rx` is closed.
    ///
    /// This is an `async fn` and should be spawned as a tokio task.  It never
    /// returns while the channel is open.  Commands are handled one at a
    /// time; the channel itself queues any request that arrives while a run
    /// is in flight.
    pub async fn run(
        self,
        mut command_rx: mpsc::Receiver<PipelineCommand>,
        event_tx: mpsc::Sender<PipelineEvent>,
    ) {
        while let Some(command) = command_rx.recv().await {
            match command {
                PipelineCommand::ProcessAudio { audio, mime_hint } => {
                    self.handle_process(&audio, &mime_hint, &event_tx).await;
                }
            }
        }

        log::info!("pipeline: command channel closed, orchestrator shutting down");
    }

    // -----------------------------------------------------------------------
    // Command handler
    // -----------------------------------------------------------------------

    /// Handle one processing request: transcribe, then extract.
    async fn handle_process(
        &self,
        audio: &[u8],
        mime_hint: &str,
        event_tx: &mpsc::Sender<PipelineEvent>,
    ) {
        // ── 1. Transcription ─────────────────────────────────────────────
        let _ = event_tx
            .send(PipelineEvent::StateChanged {
                state: ProcessingState::Transcribing,
            })
            .await;

        let transcript = match self.transcriber.transcribe(audio, mime_hint).await {
            Ok(text) => text,
            Err(e) => {
                self.send_error(event_tx, PipelineError::Transcription(e))
                    .await;
                return;
            }
        };

        let _ = event_tx
            .send(PipelineEvent::TranscriptionComplete {
                transcript: transcript.clone(),
            })
            .await;

        // ── 2. Extraction (never starts before transcription resolves) ───
        let _ = event_tx
            .send(PipelineEvent::StateChanged {
                state: ProcessingState::Extracting,
            })
            .await;

        let result = match self.extractor.extract(&transcript).await {
            Ok(result) => result,
            Err(e) => {
                self.send_error(event_tx, PipelineError::Extraction(e)).await;
                return;
            }
        };

        // ── 3. Done ──────────────────────────────────────────────────────
        let _ = event_tx
            .send(PipelineEvent::ExtractionComplete { transcript, result })
            .await;
        let _ = event_tx
            .send(PipelineEvent::StateChanged {
                state: ProcessingState::Done,
            })
            .await;
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn send_error(&self, event_tx: &mpsc::Sender<PipelineEvent>, error: PipelineError) {
        let message = error.to_string();
        log::error!("pipeline error: {message}");
        let _ = event_tx.send(PipelineEvent::Error { message }).await;
        let _ = event_tx
            .send(PipelineEvent::StateChanged {
                state: ProcessingState::Failed,
            })
            .await;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::MockExtractor;
    use crate::transcribe::MockTranscriber;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};

    const VALID_COMPLETION: &str = r#"{"teams":[{"name":"Design","tasks":[{"description":"Create landing page","deadline":"Friday","priority":"High","dependencies":[]}]}]}"#;

    // -----------------------------------------------------------------------
    // Test doubles
    // -----------------------------------------------------------------------

    /// Extractor that records whether it was ever invoked.
    struct RecordingExtractor {
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl TaskExtractor for RecordingExtractor {
        async fn extract(&self, _t: &str) -> Result<ExtractionResult, ExtractError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(ExtractionResult { teams: vec![] })
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn collect_events(
        transcriber: Arc<dyn Transcriber>,
        extractor: Arc<dyn TaskExtractor>,
    ) -> Vec<PipelineEvent> {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (event_tx, mut event_rx) = mpsc::channel(16);

        let orchestrator = PipelineOrchestrator::new(transcriber, extractor);

        command_tx
            .send(PipelineCommand::ProcessAudio {
                audio: vec![0u8; 16],
                mime_hint: "audio/webm".into(),
            })
            .await
            .unwrap();
        drop(command_tx); // close channel so run() returns

        orchestrator.run(command_rx, event_tx).await;

        let mut events = Vec::new();
        while let Some(event) = event_rx.recv().await {
            events.push(event);
        }
        events
    }

    fn states(events: &[PipelineEvent]) -> Vec<ProcessingState> {
        events
            .iter()
            .filter_map(|e| match e {
                PipelineEvent::StateChanged { state } => Some(*state),
                _ => None,
            })
            .collect()
    }

    // -----------------------------------------------------------------------
    // Tests
    // -----------------------------------------------------------------------

    /// Happy path: Transcribing → Extracting → Done, with both payloads.
    #[tokio::test]
    async fn successful_run_walks_the_full_state_machine() {
        let events = collect_events(
            Arc::new(MockTranscriber::ok("Sarah, design the landing page by Friday.")),
            Arc::new(MockExtractor::replies_with(VALID_COMPLETION)),
        )
        .await;

        assert_eq!(
            states(&events),
            vec![
                ProcessingState::Transcribing,
                ProcessingState::Extracting,
                ProcessingState::Done,
            ]
        );

        let transcript = events.iter().find_map(|e| match e {
            PipelineEvent::TranscriptionComplete { transcript } => Some(transcript.clone()),
            _ => None,
        });
        assert_eq!(
            transcript.as_deref(),
            Some("Sarah, design the landing page by Friday.")
        );

        let result = events.iter().find_map(|e| match e {
            PipelineEvent::ExtractionComplete { result, .. } => Some(result.clone()),
            _ => None,
        });
        let result = result.expect("extraction result");
        assert_eq!(result.teams[0].name, "Design");
        assert_eq!(result.teams[0].tasks[0].description, "Create landing page");
    }

    /// A transcription failure is terminal: extraction must never start.
    #[tokio::test]
    async fn transcription_failure_skips_extraction() {
        let called = Arc::new(AtomicBool::new(false));
        let extractor = Arc::new(RecordingExtractor {
            called: Arc::clone(&called),
        });

        let events = collect_events(
            Arc::new(MockTranscriber::provider_error(500, "audio rejected")),
            extractor,
        )
        .await;

        assert!(!called.load(Ordering::SeqCst), "extractor must not run");
        assert_eq!(
            states(&events),
            vec![ProcessingState::Transcribing, ProcessingState::Failed]
        );

        let message = events.iter().find_map(|e| match e {
            PipelineEvent::Error { message } => Some(message.clone()),
            _ => None,
        });
        let message = message.expect("error event");
        assert!(message.contains("Transcription failed"));
        assert!(message.contains("audio rejected"));
    }

    /// Prose-wrapped generator output ends the run in Failed — the strict
    /// parse failure surfaces instead of being silently recovered.
    #[tokio::test]
    async fn extraction_parse_failure_ends_in_failed() {
        let events = collect_events(
            Arc::new(MockTranscriber::ok("some transcript")),
            Arc::new(MockExtractor::replies_with(
                "Sure! Here is the JSON: {\"teams\": []}",
            )),
        )
        .await;

        assert_eq!(
            states(&events),
            vec![
                ProcessingState::Transcribing,
                ProcessingState::Extracting,
                ProcessingState::Failed,
            ]
        );
        assert!(events.iter().any(|e| matches!(
            e,
            PipelineEvent::Error { message } if message.contains("Task extraction failed")
        )));
    }

    /// One-shot processing returns both the transcript and the result.
    #[tokio::test]
    async fn process_returns_transcript_and_result() {
        let orchestrator = PipelineOrchestrator::new(
            Arc::new(MockTranscriber::ok("the transcript")),
            Arc::new(MockExtractor::replies_with(VALID_COMPLETION)),
        );

        let (transcript, result) = orchestrator
            .process(&[0u8; 8], "audio/mpeg")
            .await
            .expect("process");
        assert_eq!(transcript, "the transcript");
        assert_eq!(result.teams.len(), 1);
    }

    #[tokio::test]
    async fn process_propagates_transcription_error() {
        let orchestrator = PipelineOrchestrator::new(
            Arc::new(MockTranscriber::provider_error(400, "No audio file provided")),
            Arc::new(MockExtractor::replies_with(VALID_COMPLETION)),
        );

        let err = orchestrator.process(&[], "audio/webm").await.unwrap_err();
        assert!(matches!(err, PipelineError::Transcription(_)));
    }
}
