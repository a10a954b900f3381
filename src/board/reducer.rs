//! Pure board reducer — `(Board, BoardCommand) → Board`.
//!
//! Every user-initiated board mutation is expressed as a [`BoardCommand`] and
//! applied by [`apply`].  The reducer is a total function: invalid input
//! degrades to a no-op rather than raising an error, because the board has no
//! external I/O of its own.  Persistence is layered on top by
//! [`BoardStore`](crate::board::BoardStore), which writes the maps once per
//! dispatched command.

use super::model::Board;

// ---------------------------------------------------------------------------
// BoardCommand
// ---------------------------------------------------------------------------

/// A single board mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCommand {
    /// Assign a task to a member.  An empty `member` string means
    /// **unassign**: the entry is removed and completion is left untouched.
    /// A non-empty `member` sets the entry and resets the task's completion
    /// flag to `false`, regardless of its prior value — a task must never
    /// show "done" under someone who never did it.
    Assign { description: String, member: String },

    /// Flip the completion flag.  An absent entry reads as `false` before
    /// the flip, so the first toggle marks the task done.
    ToggleComplete { description: String },

    /// Empty the assignment map.  Completion map and roster are untouched.
    ClearAssignments,

    /// Add a member to the roster.  No-op when the name is empty or already
    /// present (case-sensitive match).
    AddMember { name: String },

    /// Remove a member and cascade: every assignment entry valued `name` is
    /// deleted (those tasks revert to unassigned).  Completion flags are left
    /// as-is — completion reflects the work, not the assignee.
    RemoveMember { name: String },
}

// ---------------------------------------------------------------------------
// apply
// ---------------------------------------------------------------------------

/// Apply `command` to `board`, producing the next board state.
pub fn apply(mut board: Board, command: BoardCommand) -> Board {
    match command {
        BoardCommand::Assign {
            description,
            member,
        } => {
            if member.is_empty() {
                board.assignments.remove(&description);
            } else {
                board.assignments.insert(description.clone(), member);
                board.completion.insert(description, false);
            }
        }

        BoardCommand::ToggleComplete { description } => {
            let current = board.is_completed(&description);
            board.completion.insert(description, !current);
        }

        BoardCommand::ClearAssignments => {
            board.assignments.clear();
        }

        BoardCommand::AddMember { name } => {
            if !name.is_empty() && !board.has_member(&name) {
                board.members.push(name);
            }
        }

        BoardCommand::RemoveMember { name } => {
            board.members.retain(|m| m != &name);
            board.assignments.retain(|_, member| member != &name);
        }
    }

    board
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
