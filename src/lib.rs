//! boardtrack - Inventory and relocation-history engine for evaluation boards
//!
//! This library provides the core functionality for tracking a lab's pool of
//! evaluation boards: who holds each board, where it currently sits, and an
//! append-only trail of every move it has ever made. Writes go through a
//! single-file JSON ledger so that a board mutation and its history entry
//! land together or not at all.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (boards, history entries, users)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `reports`: Read-side views (inventory listing, board history)
//!
//! # Example
//!
//! ```rust,ignore
//! use boardtrack::config::{paths::BoardtrackPaths, Settings};
//! use boardtrack::storage::Storage;
//!
//! let paths = BoardtrackPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BoardtrackError, BoardtrackResult};
