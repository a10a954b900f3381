//! Transcription client module.
//!
//! This module provides:
//! * [`Transcriber`] — async trait implemented by all speech-to-text backends.
//! * [`ApiTranscriber`] — OpenAI-style multipart transcription client.
//! * [`TranscribeError`] — error variants for transcription operations.
//!
//! The client sends raw audio bytes plus a MIME hint to the provider and
//! returns plain transcribed text.  A failed call surfaces immediately to the
//! caller; there is no retry and no local caching of audio.

pub mod client;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{ApiTranscriber, TranscribeError, Transcriber};

// test-only re-export so pipeline tests can import the mock without the full
// `crate::transcribe::client::MockTranscriber` path.
#[cfg(test)]
pub use client::MockTranscriber;
