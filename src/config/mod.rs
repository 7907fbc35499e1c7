//! Configuration module for boardtrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - The recognized-location list

pub mod paths;
pub mod settings;

pub use paths::BoardtrackPaths;
pub use settings::Settings;
