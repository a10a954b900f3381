//! Core task-board data types.
//!
//! A [`Board`] holds the categorized teams produced by extraction (or loaded
//! from a static task-source document), the team-member roster, and the two
//! persisted maps: task description → assignee and task description → done.
//!
//! # Task identity
//!
//! The task **description string** is the identity key used for assignment
//! and completion lookups.  Descriptions are expected to be unique within a
//! board; two tasks with identical descriptions collide in the maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Task priority as reported by the extraction engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Normalize a free-form priority label (case-insensitive).
    ///
    /// Anything that is not recognisably `low` / `medium` / `high` — including
    /// an absent label — falls back to [`Priority::Medium`].
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("low") => Priority::Low,
            Some("high") => Priority::High,
            _ => Priority::Medium,
        }
    }

    /// Display label, as rendered in CSV export and the CLI.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// A single delegated work item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// What the task is — also the identity key (see module docs).
    pub description: String,
    /// Opaque display string (`"Next Friday"`, `"03/14/2025"`, …).  Never
    /// parsed or validated as a date.
    pub deadline: Option<String>,
    /// Extraction-reported priority; `Medium` when unspecified.
    pub priority: Priority,
    /// Descriptions of tasks this one depends on, in extraction order.
    pub dependencies: Vec<String>,
    /// Member this task is assigned to, stamped from the assignment map.
    pub assigned_to: Option<String>,
    /// Completion flag, stamped from the completion map.
    pub completed: bool,
}

impl Task {
    /// A fresh, unassigned, incomplete task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            deadline: None,
            priority: Priority::default(),
            dependencies: Vec::new(),
            assigned_to: None,
            completed: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Team
// ---------------------------------------------------------------------------

/// A named category of tasks.
///
/// The name is a free-form label chosen by the extraction engine
/// (`"Design"`, `"Propulsion"`, …) — not a closed enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub tasks: Vec<Task>,
}

impl Team {
    pub fn new(name: impl Into<String>, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            tasks,
        }
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The full task-board state.
///
/// `assignments` and `completion` are keyed by task description.  Entries for
/// descriptions no longer present in `teams` are inert — they are not purged,
/// and simply have no visible effect.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Board {
    /// Categorized tasks, in extraction order.
    pub teams: Vec<Team>,
    /// Member roster — set semantics (case-sensitive, no duplicates),
    /// insertion-ordered for display.
    pub members: Vec<String>,
    /// Task description → assigned member.
    pub assignments: HashMap<String, String>,
    /// Task description → completed.
    pub completion: HashMap<String, bool>,
}

impl Board {
    /// Build a board from fresh team data, a roster, and the persisted maps.
    pub fn new(
        teams: Vec<Team>,
        members: Vec<String>,
        assignments: HashMap<String, String>,
        completion: HashMap<String, bool>,
    ) -> Self {
        Self {
            teams,
            members,
            assignments,
            completion,
        }
    }

    /// Whether `name` is on the roster (case-sensitive).
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m == name)
    }

    /// Completion flag for a description; absent entries read as `false`.
    pub fn is_completed(&self, description: &str) -> bool {
        self.completion.get(description).copied().unwrap_or(false)
    }

    /// Assigned member for a description, if any.
    pub fn assignee(&self, description: &str) -> Option<&str> {
        self.assignments.get(description).map(|s| s.as_str())
    }

    /// All tasks across all teams, in team order then task order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.teams.iter().flat_map(|t| t.tasks.iter())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Priority ----

    #[test]
    fn priority_default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_from_label_is_case_insensitive() {
        assert_eq!(Priority::from_label(Some("high")), Priority::High);
        assert_eq!(Priority::from_label(Some("HIGH")), Priority::High);
        assert_eq!(Priority::from_label(Some(" Low ")), Priority::Low);
        assert_eq!(Priority::from_label(Some("Medium")), Priority::Medium);
    }

    #[test]
    fn priority_unknown_label_falls_back_to_medium() {
        assert_eq!(Priority::from_label(Some("Urgent")), Priority::Medium);
        assert_eq!(Priority::from_label(Some("")), Priority::Medium);
        assert_eq!(Priority::from_label(None), Priority::Medium);
    }

    #[test]
    fn priority_display_labels() {
        assert_eq!(Priority::Low.to_string(), "Low");
        assert_eq!(Priority::Medium.to_string(), "Medium");
        assert_eq!(Priority::High.to_string(), "High");
    }

    // ---- Task / Team ----

    #[test]
    fn new_task_is_unassigned_and_incomplete() {
        let task = Task::new("Backend API development");
        assert_eq!(task.description, "Backend API development");
        assert!(task.deadline.is_none());
        assert_eq!(task.priority, Priority::Medium);
        assert!(task.dependencies.is_empty());
        assert!(task.assigned_to.is_none());
        assert!(!task.completed);
    }

    // ---- Board queries ----

    #[test]
    fn has_member_is_case_sensitive() {
        let board = Board::new(
            vec![],
            vec!["Alice".into()],
            HashMap::new(),
            HashMap::new(),
        );
        assert!(board.has_member("Alice"));
        assert!(!board.has_member("alice"));
        assert!(!board.has_member("Bob"));
    }

    #[test]
    fn is_completed_defaults_to_false_for_absent_entry() {
        let board = Board::default();
        assert!(!board.is_completed("anything"));
    }

    #[test]
    fn all_tasks_preserves_team_then_task_order() {
        let board = Board::new(
            vec![
                Team::new("Design", vec![Task::new("a"), Task::new("b")]),
                Team::new("QA", vec![Task::new("c")]),
            ],
            vec![],
            HashMap::new(),
            HashMap::new(),
        );
        let descriptions: Vec<_> = board.all_tasks().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["a", "b", "c"]);
    }
}
