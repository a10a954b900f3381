//! `BoardStore` — the board state plus its persistence boundary.
//!
//! The store owns a [`Board`] and a [`Storage`] handle.  Every dispatched
//! [`BoardCommand`] goes through the pure reducer and then produces exactly
//! one storage write of the affected maps, so no partial-write state is ever
//! observable: callers see the previous complete board or the next one.

use std::sync::Arc;

use super::model::{Board, Team};
use super::reducer::{apply, BoardCommand};
use super::storage::{
    read_map, write_map, Storage, ASSIGNMENTS_ENTRY, COMPLETION_ENTRY,
};

// ---------------------------------------------------------------------------
// BoardStore
// ---------------------------------------------------------------------------

/// Board state with durable assignment/completion maps.
pub struct BoardStore {
    board: Board,
    storage: Arc<dyn Storage>,
}

impl BoardStore {
    /// Load a store from persisted state, merging the maps into freshly
    /// supplied team data.
    ///
    /// `teams` come from the caller on every load — either a fresh extraction
    /// run or a static task-source document; they are never persisted
    /// themselves.  Absent or malformed map entries default to empty, so a
    /// corrupt storage file can never prevent a load.
    pub fn load(storage: Arc<dyn Storage>, teams: Vec<Team>, members: Vec<String>) -> Self {
        let assignments = read_map(storage.as_ref(), ASSIGNMENTS_ENTRY);
        let completion = read_map(storage.as_ref(), COMPLETION_ENTRY);

        log::debug!(
            "board: loaded {} assignment(s), {} completion flag(s)",
            assignments.len(),
            completion.len()
        );

        let board = Board::new(teams, members, assignments, completion);
        Self { board, storage }
    }

    /// The current board state.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Apply a command and persist the resulting maps in one step.
    pub fn dispatch(&mut self, command: BoardCommand) {
        let is_clear = matches!(command, BoardCommand::ClearAssignments);

        self.board = apply(std::mem::take(&mut self.board), command);

        if is_clear {
            // Clearing drops the entry entirely rather than writing `{}`.
            self.storage.remove(ASSIGNMENTS_ENTRY);
        } else {
            write_map(self.storage.as_ref(), ASSIGNMENTS_ENTRY, &self.board.assignments);
        }
        write_map(self.storage.as_ref(), COMPLETION_ENTRY, &self.board.completion);
    }

    /// Replace the team data (e.g. after a new processing run) while keeping
    /// the persisted maps and roster intact.
    pub fn replace_teams(&mut self, teams: Vec<Team>) {
        self.board.teams = teams;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
