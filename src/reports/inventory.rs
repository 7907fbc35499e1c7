//! Inventory report
//!
//! The board listing with its sort options and per-location totals,
//! everything the index view shows.

use std::collections::BTreeMap;

use crate::error::BoardtrackResult;
use crate::models::Board;
use crate::storage::Storage;

/// Field the board listing is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Sort by id; always ascending
    #[default]
    Id,
    /// Sort by name
    Name,
}

impl SortKey {
    /// Map a raw query parameter, falling back to id
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("name") => Self::Name,
            _ => Self::Id,
        }
    }
}

/// Direction for sortable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// Map a raw query parameter, falling back to ascending
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

/// Sorting options for the board listing
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardQuery {
    pub sort: SortKey,
    pub order: SortOrder,
}

impl BoardQuery {
    /// Build a query from raw request parameters
    ///
    /// Unrecognized values fall back to the id/ascending default rather
    /// than failing.
    pub fn from_params(sort: Option<&str>, order: Option<&str>) -> Self {
        Self {
            sort: SortKey::parse(sort),
            order: SortOrder::parse(order),
        }
    }
}

/// List boards according to the query
///
/// Id sort ignores the requested order and stays ascending; name sort
/// honours both directions.
pub fn list_boards(storage: &Storage, query: &BoardQuery) -> BoardtrackResult<Vec<Board>> {
    let mut boards = storage.ledger.list()?;

    match (query.sort, query.order) {
        (SortKey::Id, _) => {}
        (SortKey::Name, SortOrder::Asc) => boards.sort_by(|a, b| a.name.cmp(&b.name)),
        (SortKey::Name, SortOrder::Desc) => boards.sort_by(|a, b| b.name.cmp(&a.name)),
    }

    Ok(boards)
}

/// Count boards per location
///
/// Derived on demand, never stored.
pub fn location_counts(boards: &[Board]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for board in boards {
        *counts.entry(board.location.clone()).or_insert(0) += 1;
    }
    counts
}

/// Inventory report: the full board listing plus per-location totals
#[derive(Debug, Clone)]
pub struct InventoryReport {
    /// Boards in the requested order
    pub boards: Vec<Board>,
    /// Number of boards at each location
    pub location_counts: BTreeMap<String, usize>,
}

impl InventoryReport {
    /// Generate the inventory report
    pub fn generate(storage: &Storage, query: &BoardQuery) -> BoardtrackResult<Self> {
        let boards = list_boards(storage, query)?;
        let location_counts = location_counts(&boards);

        Ok(Self {
            boards,
            location_counts,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{:<5} {:<24} {:<16} {:<16} {:<12} {:<16}\n",
            "ID", "Name", "Serial", "Location", "Custodian", "Updated"
        ));
        output.push_str(&"-".repeat(94));
        output.push('\n');

        for board in &self.boards {
            output.push_str(&format!(
                "{:<5} {:<24} {:<16} {:<16} {:<12} {:<16}\n",
                board.id.value(),
                board.name,
                board.serial_number.as_deref().unwrap_or("-"),
                board.location,
                board.custodian,
                board.updated_at
            ));
        }

        output.push('\n');
        for (location, count) in &self.location_counts {
            output.push_str(&format!("{}: {}\n", location, count));
        }

        output
    }
}
