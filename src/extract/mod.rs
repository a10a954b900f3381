//! Task extraction module.
//!
//! This module provides:
//! * [`TaskExtractor`] — async trait implemented by extraction backends.
//! * [`ApiExtractor`] — OpenAI-compatible chat-completions extractor.
//! * [`PromptBuilder`] — the fixed instruction template.
//! * [`parse_extraction`] / [`ExtractionResult`] — strict JSON parsing of
//!   generator output into the team/task structure.
//! * [`ExtractError`] — error variants for extraction operations.
//!
//! # Parsing policy
//!
//! The full completion body must decode as the expected JSON object.  When
//! the generator wraps the JSON in prose or code fences, extraction fails
//! with [`ExtractError::Parse`] and the failure surfaces to the user — no
//! lenient recovery, no partial results.

pub mod engine;
pub mod parse;
pub mod prompt;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use engine::{ApiExtractor, ExtractError, TaskExtractor};
pub use parse::{parse_extraction, ExtractionResult};
pub use prompt::PromptBuilder;

// test-only re-export so pipeline tests can import the mock without the full
// `crate::extract::engine::MockExtractor` path.
#[cfg(test)]
pub use engine::MockExtractor;
