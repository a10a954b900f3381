//! Prompt builder for task extraction.
//!
//! [`PromptBuilder`] constructs the fixed instruction block sent to the
//! text-generation capability.  The transcript is embedded verbatim; the
//! instructions pin down the exact JSON shape the parser expects
//! (see [`parse`](crate::extract::parse)).

// ---------------------------------------------------------------------------
// System instruction
// ---------------------------------------------------------------------------

/// Role + output contract.  Kept separate from the per-call user message so
/// it maps onto the `system` slot of a chat-completions request.
const SYSTEM_INSTRUCTION: &str = "\
You are a project management assistant. You analyze transcriptions of \
conversations in which a project manager delegates work, extract every task \
being delegated, and categorize each task by the team that should handle it \
(e.g. Design, Development, Marketing, etc.).

Rules:
1. Extract all tasks being delegated, and only tasks.
2. Categorize each task by responsible team; team names are free-form labels.
3. For each task, capture any mentioned deadline, priority, or dependencies.
4. Deadlines are verbatim display strings; do not reformat or invent them.
5. Respond with ONLY the JSON object — no prose, no code fences.";

/// Response-shape template appended to every request.
const RESPONSE_SHAPE: &str = r#"
Format your response as a JSON object with the following structure:
{
  "teams": [
    {
      "name": "Team Name",
      "tasks": [
        {
          "description": "Task description",
          "deadline": "Deadline if mentioned, otherwise null",
          "priority": "Priority if mentioned, otherwise 'Medium'",
          "dependencies": ["Any dependencies mentioned"]
        }
      ]
    }
  ]
}
"#;

// ---------------------------------------------------------------------------
// PromptBuilder
// ---------------------------------------------------------------------------

/// Builds the `(system_msg, user_msg)` pair for a chat-completions request.
///
/// # Example
/// ```rust
/// use task_organizer::extract::PromptBuilder;
///
/// let builder = PromptBuilder::new();
/// let (system, user) = builder.build_chat("Sarah, please design the landing page.");
/// assert!(system.contains("project management assistant"));
/// assert!(user.contains("Sarah, please design the landing page."));
/// ```
#[derive(Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build a **(system_msg, user_msg)** pair.
    ///
    /// * `system_msg` — role and output-contract instructions.
    /// * `user_msg` — the transcript, embedded verbatim, plus the JSON
    ///   response-shape template.
    pub fn build_chat(&self, transcript: &str) -> (String, String) {
        let system_msg = SYSTEM_INSTRUCTION.to_string();

        let mut user_msg = String::with_capacity(transcript.len() + 1024);
        user_msg.push_str("Transcription:\n");
        user_msg.push_str(transcript);
        user_msg.push('\n');
        user_msg.push_str(RESPONSE_SHAPE);

        (system_msg, user_msg)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
