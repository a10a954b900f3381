//! CSV export of a categorized task list.
//!
//! One row per task, columns `Team, Task, Deadline, Priority, Dependencies`.
//! A missing deadline renders as `"N/A"`, an empty dependency list as
//! `"None"`, and multiple dependencies are joined with `"; "`.  Values are
//! double-quote-wrapped with no embedded-quote escaping — descriptions
//! containing `"` produce a malformed row (accepted limitation).

use super::model::Team;

/// CSV header row.
const CSV_HEADER: &str = "Team,Task,Deadline,Priority,Dependencies\n";

/// Render `teams` as a CSV document.
pub fn to_csv(teams: &[Team]) -> String {
    let mut csv = String::from(CSV_HEADER);

    for team in teams {
        for task in &team.tasks {
            let deadline = task.deadline.as_deref().unwrap_or("N/A");
            let dependencies = if task.dependencies.is_empty() {
                "None".to_string()
            } else {
                task.dependencies.join("; ")
            };
            csv.push_str(&format!(
                "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\"\n",
                team.name, task.description, deadline, task.priority, dependencies
            ));
        }
    }

    csv
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
