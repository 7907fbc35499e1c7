//! Ledger repository for JSON storage
//!
//! The ledger is a single document holding every board, every history
//! entry, and both id sequences. Keeping them in one file means one atomic
//! write persists a whole unit of work: a board mutation and its history
//! entry either land together or not at all.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BoardtrackError, BoardtrackResult};
use crate::models::{Board, BoardId, EntryId, HistoryEntry};

use super::file_io::{read_json, write_json_atomic};

/// Serializable ledger document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LedgerDocument {
    /// Last board id handed out; 0 when no board was ever created
    #[serde(default)]
    board_id_seq: i64,

    /// Last history entry id handed out
    #[serde(default)]
    entry_id_seq: i64,

    #[serde(default)]
    boards: Vec<Board>,

    #[serde(default)]
    history: Vec<HistoryEntry>,
}

/// In-memory ledger contents
///
/// Mutations go through [`LedgerRepository::commit`], which hands the
/// closure exclusive access to this state and persists or rolls back the
/// whole thing as a unit.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    board_id_seq: i64,
    entry_id_seq: i64,
    boards: BTreeMap<BoardId, Board>,
    history: Vec<HistoryEntry>,
}

impl LedgerState {
    fn from_document(document: LedgerDocument) -> Self {
        let mut boards = BTreeMap::new();
        for board in document.boards {
            boards.insert(board.id, board);
        }

        Self {
            board_id_seq: document.board_id_seq,
            entry_id_seq: document.entry_id_seq,
            boards,
            history: document.history,
        }
    }

    fn to_document(&self) -> LedgerDocument {
        LedgerDocument {
            board_id_seq: self.board_id_seq,
            entry_id_seq: self.entry_id_seq,
            boards: self.boards.values().cloned().collect(),
            history: self.history.clone(),
        }
    }

    /// Hand out the next board id
    pub fn allocate_board_id(&mut self) -> BoardId {
        self.board_id_seq += 1;
        BoardId::new(self.board_id_seq)
    }

    /// Hand out the next history entry id; entry ids only ever grow, so
    /// they double as the ordering key for history listings
    pub fn allocate_entry_id(&mut self) -> EntryId {
        self.entry_id_seq += 1;
        EntryId::new(self.entry_id_seq)
    }

    /// Get a board by id
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(&id)
    }

    /// Get a mutable board by id
    pub fn board_mut(&mut self, id: BoardId) -> Option<&mut Board> {
        self.boards.get_mut(&id)
    }

    /// Insert or replace a board
    pub fn insert_board(&mut self, board: Board) {
        self.boards.insert(board.id, board);
    }

    /// Remove a board together with all of its history entries
    pub fn remove_board(&mut self, id: BoardId) -> Option<Board> {
        let removed = self.boards.remove(&id);
        if removed.is_some() {
            self.history.retain(|entry| entry.board_id != id);
        }
        removed
    }

    /// Append a history entry
    pub fn append_entry(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    /// Check if a board name is already taken (exact, case-sensitive)
    pub fn name_in_use(&self, name: &str, exclude_id: Option<BoardId>) -> bool {
        self.boards
            .values()
            .any(|board| board.name == name && Some(board.id) != exclude_id)
    }

    /// Check if a serial number is already registered
    ///
    /// Boards without a serial never collide with anything.
    pub fn serial_in_use(&self, serial: &str, exclude_id: Option<BoardId>) -> bool {
        self.boards.values().any(|board| {
            board.serial_number.as_deref() == Some(serial) && Some(board.id) != exclude_id
        })
    }
}

/// Repository for ledger persistence
pub struct LedgerRepository {
    path: PathBuf,
    state: RwLock<LedgerState>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(LedgerState::default()),
        }
    }

    /// Load the ledger from disk
    pub fn load(&self) -> Result<(), BoardtrackError> {
        let document: LedgerDocument = read_json(&self.path)?;

        let mut state = self.state.write().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *state = LedgerState::from_document(document);
        Ok(())
    }

    /// Save the ledger to disk
    pub fn save(&self) -> Result<(), BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &state.to_document())
    }

    /// Run a mutation as one unit of work
    ///
    /// The closure gets exclusive access to the ledger state. When it
    /// returns `Ok`, the state is persisted before the lock is released;
    /// when the closure or the write fails, the pre-operation state is
    /// restored, so neither memory nor disk ever shows a partial mutation.
    /// Uniqueness checks made inside the closure therefore serialize
    /// racing writers.
    pub fn commit<T, F>(&self, op: F) -> BoardtrackResult<T>
    where
        F: FnOnce(&mut LedgerState) -> BoardtrackResult<T>,
    {
        let mut state = self.state.write().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let checkpoint = state.clone();
        let outcome = op(&mut state)
            .and_then(|value| write_json_atomic(&self.path, &state.to_document()).map(|_| value));

        if outcome.is_err() {
            *state = checkpoint;
        }

        outcome
    }

    /// Get a board by ID
    pub fn get(&self, id: BoardId) -> Result<Option<Board>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.board(id).cloned())
    }

    /// Get a board by name (exact, case-sensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Board>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.boards.values().find(|b| b.name == name).cloned())
    }

    /// Get all boards, ordered by id ascending
    pub fn list(&self) -> Result<Vec<Board>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.boards.values().cloned().collect())
    }

    /// Check if a board exists
    pub fn exists(&self, id: BoardId) -> Result<bool, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.boards.contains_key(&id))
    }

    /// Get a board's history entries, newest first
    pub fn history_for(&self, board_id: BoardId) -> Result<Vec<HistoryEntry>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut entries: Vec<_> = state
            .history
            .iter()
            .filter(|entry| entry.board_id == board_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(entries)
    }

    /// Count boards
    pub fn board_count(&self) -> Result<usize, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.boards.len())
    }

    /// Count history entries across all boards
    pub fn entry_count(&self) -> Result<usize, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.history.len())
    }
}
