//! Storage layer for boardtrack
//!
//! Provides JSON file storage with atomic writes, commit/rollback units
//! of work, and automatic directory creation.

pub mod file_io;
pub mod init;
pub mod ledger;
pub mod users;

pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::{LedgerRepository, LedgerState};
pub use users::{UserRepository, UserState};

use crate::config::paths::BoardtrackPaths;
use crate::error::BoardtrackError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BoardtrackPaths,
    pub ledger: LedgerRepository,
    pub users: UserRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BoardtrackPaths) -> Result<Self, BoardtrackError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            users: UserRepository::new(paths.users_file()),
            paths,
        })
    }

    /// Create a Storage instance and load all data from disk
    pub fn open(paths: BoardtrackPaths) -> Result<Self, BoardtrackError> {
        let storage = Self::new(paths)?;
        storage.load_all()?;
        Ok(storage)
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &BoardtrackPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> Result<(), BoardtrackError> {
        self.ledger.load()?;
        self.users.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), BoardtrackError> {
        self.ledger.save()?;
        self.users.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Board, BoardId};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_open_sees_committed_state() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        storage
            .ledger
            .commit(|state| {
                let id = state.allocate_board_id();
                state.insert_board(Board {
                    id,
                    name: "RZ/G2L-EVK".to_string(),
                    serial_number: None,
                    location: "Dev room".to_string(),
                    custodian: "suzuki".to_string(),
                    notes: String::new(),
                    updated_at: "2025/04/01 12:00".to_string(),
                });
                Ok(())
            })
            .unwrap();

        let reopened = Storage::open(paths).unwrap();
        let board = reopened.ledger.get(BoardId::new(1)).unwrap().unwrap();
        assert_eq!(board.name, "RZ/G2L-EVK");
    }

    #[test]
    fn test_save_all_writes_both_documents() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let storage = Storage::new(paths.clone()).unwrap();
        storage.save_all().unwrap();

        assert!(paths.ledger_file().exists());
        assert!(paths.users_file().exists());
    }
}
