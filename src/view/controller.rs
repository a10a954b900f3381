//! Board view controller — reconciles extraction output with persisted state.
//!
//! [`BoardController`] sits between the raw team/task data (from extraction
//! or a static task-source document) and the persisted assignment/completion
//! maps.  The canonical task lists never carry assignment state themselves;
//! the controller stamps `assigned_to` and `completed` onto every task each
//! time a view is derived, with the task description as the join key.

use crate::board::model::{Board, Task, Team};
use crate::board::reducer::BoardCommand;
use crate::board::store::BoardStore;

// ---------------------------------------------------------------------------
// DragPayload
// ---------------------------------------------------------------------------

/// Payload carried by a drag operation — just the task's description.
///
/// Dropping onto a member is equivalent to an assign.  There is no check
/// that the dragged description still exists on drop: a stale drag is
/// accepted silently and creates an inert assignment entry.
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub description: String,
}

// ---------------------------------------------------------------------------
// BoardController
// ---------------------------------------------------------------------------

/// Mediates all user-initiated board mutations and derives the views.
pub struct BoardController {
    store: BoardStore,
}

impl BoardController {
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }

    /// The current raw board state.
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// Each team's task list with `assigned_to`/`completed` stamped from the
    /// current maps.  Re-derived on every call, so it always reflects the
    /// latest accepted command.
    pub fn teams(&self) -> Vec<Team> {
        let board = self.store.board();
        board
            .teams
            .iter()
            .map(|team| {
                let tasks = team.tasks.iter().map(|t| stamp(t, board)).collect();
                Team::new(team.name.clone(), tasks)
            })
            .collect()
    }

    /// Tasks assigned to `member`, in source-team order, stable-sorted so
    /// completed tasks come after incomplete ones.  Tasks with equal
    /// completion state keep their original relative order — there is no
    /// secondary sort key.
    pub fn member_tasks(&self, member: &str) -> Vec<Task> {
        let board = self.store.board();
        let mut tasks: Vec<Task> = board
            .all_tasks()
            .filter(|t| board.assignee(&t.description) == Some(member))
            .map(|t| stamp(t, board))
            .collect();

        // Vec::sort_by is stable; comparing only the completion flag yields
        // the completion partition without disturbing source order.
        tasks.sort_by(|a, b| a.completed.cmp(&b.completed));
        tasks
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Assign a task to a member.
    pub fn assign(&mut self, description: &str, member: &str) {
        self.store.dispatch(BoardCommand::Assign {
            description: description.to_string(),
            member: member.to_string(),
        });
    }

    /// Revert a task to unassigned (completion untouched).
    pub fn unassign(&mut self, description: &str) {
        self.assign(description, "");
    }

    /// Flip a task's completion flag.
    pub fn toggle_complete(&mut self, description: &str) {
        self.store.dispatch(BoardCommand::ToggleComplete {
            description: description.to_string(),
        });
    }

    /// Empty the assignment map.
    pub fn clear_assignments(&mut self) {
        self.store.dispatch(BoardCommand::ClearAssignments);
    }

    /// Add a member to the roster (no-op when empty or already present).
    pub fn add_member(&mut self, name: &str) {
        self.store.dispatch(BoardCommand::AddMember {
            name: name.to_string(),
        });
    }

    /// Remove a member; their assignments cascade away.
    pub fn remove_member(&mut self, name: &str) {
        self.store.dispatch(BoardCommand::RemoveMember {
            name: name.to_string(),
        });
    }

    // -----------------------------------------------------------------------
    // Drag and drop
    // -----------------------------------------------------------------------

    /// Start dragging a task.
    pub fn begin_drag(&self, description: &str) -> DragPayload {
        DragPayload {
            description: description.to_string(),
        }
    }

    /// Drop a dragged task onto a member's region.
    pub fn drop_on_member(&mut self, payload: DragPayload, member: &str) {
        self.assign(&payload.description, member);
    }
}

// ---------------------------------------------------------------------------
// Stamping
// ---------------------------------------------------------------------------

/// Copy a canonical task and stamp assignment/completion from the maps.
fn stamp(task: &Task, board: &Board) -> Task {
    let mut stamped = task.clone();
    stamped.assigned_to = board.assignee(&task.description).map(|s| s.to_string());
    stamped.completed = board.is_completed(&task.description);
    stamped
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
