//! Static task-source document parsing.
//!
//! In the non-audio flow the canonical task list comes from a JSON document
//! of shape `[{ "category": "…", "tasks": [{ "name": "…", "dueDate"? }] }]`,
//! fetched once per view load.  This module converts that document into the
//! same [`Team`] structure the extraction engine produces, so the rest of the
//! board code does not care which flow supplied the tasks.

use serde::Deserialize;
use thiserror::Error;

use super::model::{Task, Team};

// ---------------------------------------------------------------------------
// Wire shape
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CategoryDoc {
    category: String,
    #[serde(default)]
    tasks: Vec<SourceTask>,
}

#[derive(Debug, Deserialize)]
struct SourceTask {
    name: String,
    /// Optional; the generator sometimes emits an empty string instead of
    /// omitting the field — both mean "no due date".
    #[serde(default, rename = "dueDate")]
    due_date: Option<String>,
}

// ---------------------------------------------------------------------------
// SourceError
// ---------------------------------------------------------------------------

/// The task-source document was not valid JSON of the expected shape.
#[derive(Debug, Error)]
#[error("invalid task-source document: {0}")]
pub struct SourceError(#[from] serde_json::Error);

// ---------------------------------------------------------------------------
// parse_task_source
// ---------------------------------------------------------------------------

/// Parse a task-source document into teams.
///
/// `category` becomes the team name, each task `name` becomes a description,
/// `dueDate` becomes the deadline (empty string normalizes to `None`).
/// Priorities default to `Medium` and dependency lists to empty — the source
/// document carries neither.
pub fn parse_task_source(json: &str) -> Result<Vec<Team>, SourceError> {
    let docs: Vec<CategoryDoc> = serde_json::from_str(json)?;

    let teams = docs
        .into_iter()
        .map(|doc| {
            let tasks = doc
                .tasks
                .into_iter()
                .map(|t| {
                    let mut task = Task::new(t.name);
                    task.deadline = t.due_date.filter(|d| !d.is_empty());
                    task
                })
                .collect();
            Team::new(doc.category, tasks)
        })
        .collect();

    Ok(teams)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::model::Priority;

    #[test]
    fn parses_categories_into_teams() {
        let json = r#"[
            {
                "category": "Electronics",
                "tasks": [
                    { "name": "Order flight controller", "dueDate": "03/14/2025" },
                    { "name": "Solder test harness", "dueDate": "" },
                    { "name": "Bench-test telemetry" }
                ]
            },
            { "category": "Structures", "tasks": [] }
        ]"#;

        let teams = parse_task_source(json).expect("parse");
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Electronics");
        assert_eq!(teams[0].tasks.len(), 3);
        assert_eq!(
            teams[0].tasks[0].deadline.as_deref(),
            Some("03/14/2025")
        );
        // Empty string and absent field both mean no due date.
        assert!(teams[0].tasks[1].deadline.is_none());
        assert!(teams[0].tasks[2].deadline.is_none());
        // The document carries no priorities or dependencies.
        assert_eq!(teams[0].tasks[0].priority, Priority::Medium);
        assert!(teams[0].tasks[0].dependencies.is_empty());

        assert_eq!(teams[1].name, "Structures");
        assert!(teams[1].tasks.is_empty());
    }

    #[test]
    fn rejects_non_array_document() {
        let err = parse_task_source(r#"{"category":"Design"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(parse_task_source("not json").is_err());
    }

    #[test]
    fn empty_array_yields_no_teams() {
        let teams = parse_task_source("[]").expect("parse");
        assert!(teams.is_empty());
    }
}
