//! Processing-pipeline state machine.
//!
//! [`ProcessingState`] makes the two-stage transcribe-then-extract flow and
//! its terminal states explicit, instead of leaving them implicit in nested
//! callbacks.

// ---------------------------------------------------------------------------
// ProcessingState
// ---------------------------------------------------------------------------

/// States of the conversation-processing pipeline.
///
/// The state machine transitions are:
///
/// ```text
/// Idle ──process request──▶ Transcribing
///                           ──STT done──▶ Extracting
///                                         ──parse ok──▶ Done
/// Transcribing / Extracting ──error──▶ Failed
/// Done / Failed ──next request──▶ Transcribing
/// ```
///
/// Extraction never starts before transcription resolves, and a failure at
/// either stage is terminal for the run — a new run requires a new
/// user-initiated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingState {
    /// Waiting for a processing request.
    Idle,

    /// Audio has been handed to the speech-to-text provider.
    Transcribing,

    /// Transcription is complete; the generator is categorizing tasks.
    Extracting,

    /// Extraction produced a categorized task structure.
    Done,

    /// Transcription or extraction failed.  The pipeline accepts a new
    /// request; the failed run is never retried automatically.
    Failed,
}

impl ProcessingState {
    /// Returns `true` while a provider call is in flight.
    ///
    /// Callers use this to disable a second "process" action while one is
    /// running — the core itself does not prevent concurrent requests.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            ProcessingState::Transcribing | ProcessingState::Extracting
        )
    }

    /// A short human-readable label suitable for status display.
    pub fn label(&self) -> &'static str {
        match self {
            ProcessingState::Idle => "Idle",
            ProcessingState::Transcribing => "Transcribing",
            ProcessingState::Extracting => "Extracting tasks",
            ProcessingState::Done => "Done",
            ProcessingState::Failed => "Failed",
        }
    }
}

impl Default for ProcessingState {
    fn default() -> Self {
        ProcessingState::Idle
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
