//! History entry model
//!
//! One record per material custody change, appended by the board service
//! and never mutated afterwards. Entries are removed only when the board
//! that owns them is deleted.

use serde::{Deserialize, Serialize};

use super::ids::{BoardId, EntryId};

/// An append-only record of a board moving
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier assigned by the ledger, monotonically increasing
    /// across all entries; the only ordering key
    pub id: EntryId,

    /// The board this entry belongs to
    pub board_id: BoardId,

    /// Where the board was before the change; empty when unknown
    #[serde(default)]
    pub previous_location: String,

    /// Where the board moved to
    pub new_location: String,

    /// Who submitted the change
    pub changed_by: String,

    /// When the change happened, as a display stamp
    pub changed_at: String,
}
