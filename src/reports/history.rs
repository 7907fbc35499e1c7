//! Board history report
//!
//! One board's relocation trail, newest entry first.

use crate::error::{BoardtrackError, BoardtrackResult};
use crate::models::{Board, BoardId, HistoryEntry};
use crate::storage::Storage;

/// Get a board's history entries, newest first
///
/// Unlike the raw repository read, asking for an unknown board is an
/// error here rather than an empty list.
pub fn history_for(storage: &Storage, board_id: BoardId) -> BoardtrackResult<Vec<HistoryEntry>> {
    if !storage.ledger.exists(board_id)? {
        return Err(BoardtrackError::board_not_found(board_id.to_string()));
    }

    storage.ledger.history_for(board_id)
}

/// Board history report: the board together with its relocation trail
#[derive(Debug, Clone)]
pub struct BoardHistory {
    /// The board the entries belong to
    pub board: Board,
    /// History entries, newest first
    pub entries: Vec<HistoryEntry>,
}

impl BoardHistory {
    /// Generate the history report for one board
    pub fn generate(storage: &Storage, board_id: BoardId) -> BoardtrackResult<Self> {
        let board = storage
            .ledger
            .get(board_id)?
            .ok_or_else(|| BoardtrackError::board_not_found(board_id.to_string()))?;
        let entries = storage.ledger.history_for(board_id)?;

        Ok(Self { board, entries })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("History for {}\n", self.board));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        if self.entries.is_empty() {
            output.push_str("No recorded moves\n");
            return output;
        }

        for entry in &self.entries {
            let from = if entry.previous_location.is_empty() {
                "-"
            } else {
                entry.previous_location.as_str()
            };
            output.push_str(&format!(
                "{:<16} {:<16} -> {:<16} by {}\n",
                entry.changed_at, from, entry.new_location, entry.changed_by
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::BoardtrackPaths;
    use crate::config::Settings;
    use crate::models::{BoardInput, Clock, EntryId, LocationChoice};
    use crate::services::BoardService;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_history_for_unknown_board_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();

        let result = history_for(&storage, BoardId::new(42));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_history_for_board_without_moves_is_empty() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BoardService::new(&storage, &settings);

        let board = service
            .create(
                BoardInput::new("jetson-01", LocationChoice::Named("Dev room".into())),
                "suzuki",
            )
            .unwrap();

        let entries = history_for(&storage, board.id).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn test_entries_come_back_newest_first() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let clock = Clock::fixed(Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap());
        let service = BoardService::with_clock(&storage, &settings, clock.clone());

        let board = service
            .create(
                BoardInput::new("jetson-01", LocationChoice::Named("Dev room".into())),
                "suzuki",
            )
            .unwrap();

        clock.advance_minutes(5);
        service
            .update(
                board.id,
                BoardInput::new("jetson-01", LocationChoice::Named("Test bench".into())),
                "suzuki",
            )
            .unwrap();

        clock.advance_minutes(5);
        service
            .update(
                board.id,
                BoardInput::new("jetson-01", LocationChoice::Named("Warehouse".into())),
                "tanaka",
            )
            .unwrap();

        let entries = history_for(&storage, board.id).unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries[0].id > entries[1].id);
        assert_eq!(entries[0].new_location, "Warehouse");
        assert_eq!(entries[1].new_location, "Test bench");
    }

    #[test]
    fn test_history_after_delete_is_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = BoardService::new(&storage, &settings);

        let board = service
            .create(
                BoardInput::new("jetson-01", LocationChoice::Named("Dev room".into())),
                "suzuki",
            )
            .unwrap();
        service
            .update(
                board.id,
                BoardInput::new("jetson-01", LocationChoice::Named("Warehouse".into())),
                "suzuki",
            )
            .unwrap();
        service.delete(board.id).unwrap();

        let result = history_for(&storage, board.id);
        assert!(result.is_err());
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_generate_report() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let clock = Clock::fixed(Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap());
        let service = BoardService::with_clock(&storage, &settings, clock.clone());

        let board = service
            .create(
                BoardInput::new("jetson-01", LocationChoice::Named("Dev room".into())),
                "suzuki",
            )
            .unwrap();
        clock.advance_minutes(30);
        service
            .update(
                board.id,
                BoardInput::new("jetson-01", LocationChoice::Named("On loan".into())),
                "sato",
            )
            .unwrap();

        let report = BoardHistory::generate(&storage, board.id).unwrap();
        assert_eq!(report.board.name, "jetson-01");
        assert_eq!(report.entries.len(), 1);

        let rendered = report.format_terminal();
        assert!(rendered.contains("jetson-01 (On loan)"));
        assert!(rendered.contains("Dev room"));
        assert!(rendered.contains("by sato"));
    }

    #[test]
    fn test_format_terminal_marks_unknown_previous_location() {
        // Older documents may carry entries with no previous location
        let report = BoardHistory {
            board: Board {
                id: BoardId::new(1),
                name: "jetson-01".to_string(),
                serial_number: None,
                location: "Warehouse".to_string(),
                custodian: "suzuki".to_string(),
                notes: String::new(),
                updated_at: "2025/04/01 12:00".to_string(),
            },
            entries: vec![HistoryEntry {
                id: EntryId::new(1),
                board_id: BoardId::new(1),
                previous_location: String::new(),
                new_location: "Warehouse".to_string(),
                changed_by: "suzuki".to_string(),
                changed_at: "2025/04/01 12:00".to_string(),
            }],
        };

        let rendered = report.format_terminal();
        let row = rendered.lines().nth(2).unwrap();
        assert!(row.starts_with("2025/04/01 12:00 -"));
        assert!(row.contains("-> Warehouse"));
    }
}
