//! Reports module for boardtrack
//!
//! Provides the read-side views over the ledger: the sorted board
//! listing with per-location totals, and per-board relocation history.

pub mod history;
pub mod inventory;

pub use history::{history_for, BoardHistory};
pub use inventory::{
    list_boards, location_counts, BoardQuery, InventoryReport, SortKey, SortOrder,
};
