//! Core data models for boardtrack
//!
//! This module contains all the data structures that represent the
//! inventory domain: boards, history entries, users, and the supporting
//! identifier and time types.

pub mod board;
pub mod clock;
pub mod history;
pub mod ids;
pub mod location;
pub mod user;

pub use board::{Board, BoardFields, BoardInput};
pub use clock::Clock;
pub use history::HistoryEntry;
pub use ids::{BoardId, EntryId, UserId};
pub use location::LocationChoice;
pub use user::User;
