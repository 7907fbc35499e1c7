//! Board service
//!
//! Provides business logic for board management including creation,
//! updates, bulk relocation, deletion, and the material-change rule that
//! decides when a history entry is recorded.

use std::collections::BTreeSet;

use crate::config::Settings;
use crate::error::{BoardtrackError, BoardtrackResult};
use crate::models::{Board, BoardId, BoardInput, Clock, HistoryEntry, LocationChoice};
use crate::storage::Storage;

use super::change;

/// Service for board custody and lifecycle
pub struct BoardService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
    clock: Clock,
}

impl<'a> BoardService<'a> {
    /// Create a new board service using the system clock
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self {
            storage,
            settings,
            clock: Clock::system(),
        }
    }

    /// Create a board service with an explicit clock
    pub fn with_clock(storage: &'a Storage, settings: &'a Settings, clock: Clock) -> Self {
        Self {
            storage,
            settings,
            clock,
        }
    }

    /// Register a new board
    ///
    /// The initial placement is not a change, so no history entry is
    /// written. Name and serial uniqueness are checked inside the commit,
    /// which serializes racing creators.
    pub fn create(&self, input: BoardInput, custodian: &str) -> BoardtrackResult<Board> {
        let custodian = custodian.trim();
        if custodian.is_empty() {
            return Err(BoardtrackError::Validation("Custodian is required".into()));
        }

        let fields = input.into_fields(&self.settings.known_locations)?;
        let stamp = self.clock.stamp();

        self.storage.ledger.commit(|state| {
            // Check for duplicate name
            if state.name_in_use(&fields.name, None) {
                return Err(BoardtrackError::duplicate_board_name(fields.name.clone()));
            }

            // Check for duplicate serial number
            if let Some(serial) = &fields.serial_number {
                if state.serial_in_use(serial, None) {
                    return Err(BoardtrackError::duplicate_serial(serial.clone()));
                }
            }

            let id = state.allocate_board_id();
            let board = Board::new(id, fields, custodian, stamp);
            state.insert_board(board.clone());
            Ok(board)
        })
    }

    /// Update a board's fields
    ///
    /// The board must exist; an unknown id is reported before the input is
    /// validated. A material custody change (location or custodian differs)
    /// appends exactly one history entry and then rewrites the board row;
    /// anything else rewrites the row only, still refreshing `updated_at`.
    pub fn update(
        &self,
        id: BoardId,
        input: BoardInput,
        custodian: &str,
    ) -> BoardtrackResult<Board> {
        let stamp = self.clock.stamp();

        self.storage.ledger.commit(|state| {
            let board = state
                .board(id)
                .ok_or_else(|| BoardtrackError::board_not_found(id.to_string()))?;
            let previous_location = board.location.clone();
            let previous_custodian = board.custodian.clone();

            let custodian = custodian.trim();
            if custodian.is_empty() {
                return Err(BoardtrackError::Validation("Custodian is required".into()));
            }

            let fields = input.into_fields(&self.settings.known_locations)?;

            // Check for duplicate name (excluding self)
            if state.name_in_use(&fields.name, Some(id)) {
                return Err(BoardtrackError::duplicate_board_name(fields.name.clone()));
            }

            // Check for duplicate serial number (excluding self)
            if let Some(serial) = &fields.serial_number {
                if state.serial_in_use(serial, Some(id)) {
                    return Err(BoardtrackError::duplicate_serial(serial.clone()));
                }
            }

            let outcome = change::evaluate(
                &previous_location,
                &previous_custodian,
                &fields.location,
                custodian,
            );
            if outcome.is_material() {
                let entry_id = state.allocate_entry_id();
                state.append_entry(HistoryEntry {
                    id: entry_id,
                    board_id: id,
                    previous_location,
                    new_location: fields.location.clone(),
                    changed_by: custodian.to_string(),
                    changed_at: stamp.clone(),
                });
            }

            let board = state
                .board_mut(id)
                .ok_or_else(|| BoardtrackError::board_not_found(id.to_string()))?;
            board.apply(fields, custodian, stamp);
            Ok(board.clone())
        })
    }

    /// Move several boards to one location in a single unit of work
    ///
    /// Ids that match no board are skipped. Returns the number of boards
    /// written. A history entry is recorded only for boards whose location
    /// actually changed; a board already at the target location still gets
    /// its custodian and `updated_at` rewritten.
    pub fn relocate(
        &self,
        board_ids: &BTreeSet<BoardId>,
        location: &LocationChoice,
        custodian: &str,
    ) -> BoardtrackResult<usize> {
        if board_ids.is_empty() {
            return Err(BoardtrackError::Validation("No boards selected".into()));
        }

        let custodian = custodian.trim();
        if custodian.is_empty() {
            return Err(BoardtrackError::Validation("Custodian is required".into()));
        }

        let location = location.resolve(&self.settings.known_locations)?;
        let stamp = self.clock.stamp();

        self.storage.ledger.commit(|state| {
            let mut touched = 0;

            for &id in board_ids {
                let previous_location = match state.board(id) {
                    Some(board) => board.location.clone(),
                    None => continue,
                };

                if change::evaluate_relocation(&previous_location, &location).is_material() {
                    let entry_id = state.allocate_entry_id();
                    state.append_entry(HistoryEntry {
                        id: entry_id,
                        board_id: id,
                        previous_location,
                        new_location: location.clone(),
                        changed_by: custodian.to_string(),
                        changed_at: stamp.clone(),
                    });
                }

                if let Some(board) = state.board_mut(id) {
                    board.relocate(location.clone(), custodian, stamp.clone());
                    touched += 1;
                }
            }

            Ok(touched)
        })
    }

    /// Delete a board together with its entire history
    ///
    /// Returns the removed board so callers can report what disappeared.
    pub fn delete(&self, id: BoardId) -> BoardtrackResult<Board> {
        self.storage.ledger.commit(|state| {
            state
                .remove_board(id)
                .ok_or_else(|| BoardtrackError::board_not_found(id.to_string()))
        })
    }

    /// Get a board by ID
    pub fn get(&self, id: BoardId) -> BoardtrackResult<Option<Board>> {
        self.storage.ledger.get(id)
    }

    /// Get a board by its exact name
    pub fn find_by_name(&self, name: &str) -> BoardtrackResult<Option<Board>> {
        self.storage.ledger.get_by_name(name)
    }
}
