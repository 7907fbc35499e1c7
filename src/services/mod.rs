//! Service layer for boardtrack
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, the material-change rule, and cross-entity
//! operations.

pub mod board;
pub mod change;
pub mod user;

pub use board::BoardService;
pub use change::{evaluate, evaluate_relocation, ChangeOutcome};
pub use user::UserService;
