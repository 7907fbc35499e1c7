//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::BoardtrackPaths;
use crate::config::settings::Settings;
use crate::error::BoardtrackError;

use super::ledger::LedgerRepository;
use super::users::UserRepository;

/// Initialize storage for a fresh installation
///
/// Writes the default settings and empty data documents. Files that
/// already exist are left untouched, so running this on an initialized
/// installation is harmless.
pub fn initialize_storage(paths: &BoardtrackPaths) -> Result<(), BoardtrackError> {
    // Ensure all directories exist
    paths.ensure_directories()?;

    if !paths.settings_file().exists() {
        Settings::default().save(paths)?;
    }

    if !paths.ledger_file().exists() {
        LedgerRepository::new(paths.ledger_file()).save()?;
    }

    if !paths.users_file().exists() {
        UserRepository::new(paths.users_file()).save()?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BoardtrackPaths) -> bool {
    !paths.settings_file().exists()
}
