//! Strict parsing of generator output into an [`ExtractionResult`].
//!
//! The generation provider enforces no schema — compliance is entirely this
//! crate's responsibility.  The policy is a **strict** JSON decode of the
//! full response body: if the generator wrapped the JSON in prose or code
//! fences, parsing fails and the failure surfaces to the user.  No lenient
//! fenced-JSON recovery is attempted — a partial or guessed parse would
//! silently corrupt the task board.
//!
//! Normalization happens after the decode succeeds, on *values* only:
//! a missing or unrecognised priority label becomes `Medium`, a missing
//! dependency list becomes empty, and deadlines pass through untouched
//! (empty string normalizes to `None`, like the static task-source document).

use serde::Deserialize;

use crate::board::model::{Priority, Task, Team};

// ---------------------------------------------------------------------------
// ExtractionResult
// ---------------------------------------------------------------------------

/// Categorized teams produced by one extraction run.
///
/// Produced fresh per processing run and never merged automatically with a
/// prior run's assignments — that merge is the view controller's job.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub teams: Vec<Team>,
}

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct WireResult {
    teams: Vec<WireTeam>,
}

#[derive(Debug, Deserialize)]
struct WireTeam {
    name: String,
    #[serde(default)]
    tasks: Vec<WireTask>,
}

#[derive(Debug, Deserialize)]
struct WireTask {
    description: String,
    #[serde(default)]
    deadline: Option<String>,
    /// Free-form label from the generator; normalized via
    /// [`Priority::from_label`].
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    dependencies: Vec<String>,
}

// ---------------------------------------------------------------------------
// parse_extraction
// ---------------------------------------------------------------------------

/// Decode the full generator response body into an [`ExtractionResult`].
///
/// Returns the raw `serde_json` error on failure so the caller can wrap it
/// in its own error type with the body context attached.
pub fn parse_extraction(body: &str) -> Result<ExtractionResult, serde_json::Error> {
    let wire: WireResult = serde_json::from_str(body)?;

    let teams = wire
        .teams
        .into_iter()
        .map(|team| {
            let tasks = team
                .tasks
                .into_iter()
                .map(|t| Task {
                    description: t.description,
                    deadline: t.deadline.filter(|d| !d.is_empty()),
                    priority: Priority::from_label(t.priority.as_deref()),
                    dependencies: t.dependencies,
                    assigned_to: None,
                    completed: false,
                })
                .collect();
            Team::new(team.name, tasks)
        })
        .collect();

    Ok(ExtractionResult { teams })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_response() {
        let body = r#"{"teams":[{"name":"Design","tasks":[{"description":"Create landing page","deadline":"Friday","priority":"High","dependencies":[]}]}]}"#;
        let result = parse_extraction(body).expect("parse");

        assert_eq!(result.teams.len(), 1);
        assert_eq!(result.teams[0].name, "Design");
        assert_eq!(result.teams[0].tasks.len(), 1);

        let task = &result.teams[0].tasks[0];
        assert_eq!(task.description, "Create landing page");
        assert_eq!(task.deadline.as_deref(), Some("Friday"));
        assert_eq!(task.priority, Priority::High);
        assert!(task.dependencies.is_empty());
        assert!(task.assigned_to.is_none());
        assert!(!task.completed);
    }

    /// Prose-wrapped JSON must fail — no lenient fenced-JSON extraction.
    #[test]
    fn prose_wrapped_json_fails() {
        let body = "Sure! Here is the JSON: {\"teams\": []}";
        assert!(parse_extraction(body).is_err());
    }

    #[test]
    fn code_fenced_json_fails() {
        let body = "```json\n{\"teams\": []}\n```";
        assert!(parse_extraction(body).is_err());
    }

    #[test]
    fn missing_priority_defaults_to_medium() {
        let body = r#"{"teams":[{"name":"QA","tasks":[{"description":"Set up testing protocols"}]}]}"#;
        let result = parse_extraction(body).expect("parse");
        let task = &result.teams[0].tasks[0];
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.dependencies.is_empty());
        assert!(task.deadline.is_none());
    }

    #[test]
    fn unknown_priority_label_normalizes_to_medium() {
        let body = r#"{"teams":[{"name":"Ops","tasks":[{"description":"Rotate keys","priority":"Urgent"}]}]}"#;
        let result = parse_extraction(body).expect("parse");
        assert_eq!(result.teams[0].tasks[0].priority, Priority::Medium);
    }

    #[test]
    fn null_deadline_passes_through_as_none() {
        let body = r#"{"teams":[{"name":"Dev","tasks":[{"description":"Backend API development","deadline":null}]}]}"#;
        let result = parse_extraction(body).expect("parse");
        assert!(result.teams[0].tasks[0].deadline.is_none());
    }

    /// Deadlines are opaque display strings — no date parsing or validation.
    #[test]
    fn deadline_string_is_not_validated() {
        let body = r#"{"teams":[{"name":"Dev","tasks":[{"description":"x","deadline":"End of the month"}]}]}"#;
        let result = parse_extraction(body).expect("parse");
        assert_eq!(
            result.teams[0].tasks[0].deadline.as_deref(),
            Some("End of the month")
        );
    }

    #[test]
    fn dependencies_preserve_order() {
        let body = r#"{"teams":[{"name":"Dev","tasks":[{"description":"Frontend implementation","dependencies":["Backend API development","Design handoff"]}]}]}"#;
        let result = parse_extraction(body).expect("parse");
        assert_eq!(
            result.teams[0].tasks[0].dependencies,
            vec!["Backend API development".to_string(), "Design handoff".to_string()]
        );
    }

    #[test]
    fn empty_teams_is_valid() {
        let result = parse_extraction(r#"{"teams":[]}"#).expect("parse");
        assert!(result.teams.is_empty());
    }

    #[test]
    fn missing_teams_key_fails() {
        assert!(parse_extraction(r#"{"categories":[]}"#).is_err());
    }
}
