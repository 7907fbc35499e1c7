//! User settings for boardtrack
//!
//! Manages deployment preferences, chiefly the closed set of recognized
//! locations offered when a board is placed somewhere.

use serde::{Deserialize, Serialize};

use super::paths::BoardtrackPaths;
use crate::error::BoardtrackError;

/// User settings for boardtrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locations a board may be assigned to by name
    ///
    /// Boards can always be placed at a free-form "other" location; this
    /// list only controls the named choices.
    #[serde(default = "default_known_locations")]
    pub known_locations: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_known_locations() -> Vec<String> {
    vec![
        "Dev room".to_string(),
        "Test bench".to_string(),
        "Warehouse".to_string(),
        "On loan".to_string(),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            known_locations: default_known_locations(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BoardtrackPaths) -> Result<Self, BoardtrackError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BoardtrackError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BoardtrackError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BoardtrackPaths) -> Result<(), BoardtrackError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BoardtrackError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            BoardtrackError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert!(settings.known_locations.contains(&"Dev room".to_string()));
        assert_eq!(settings.known_locations.len(), 4);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.known_locations.push("Calibration lab".to_string());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(loaded
            .known_locations
            .contains(&"Calibration lab".to_string()));
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BoardtrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.known_locations, default_known_locations());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.known_locations, deserialized.known_locations);
    }
}
