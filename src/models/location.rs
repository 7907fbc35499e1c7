//! Location input handling
//!
//! Callers place a board either at one of the locations configured in
//! [`crate::config::Settings`] or at a free-form "other" location. The
//! choice is resolved to a plain string before it is persisted.

use serde::{Deserialize, Serialize};

use crate::error::{BoardtrackError, BoardtrackResult};

/// A caller's choice of where a board lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationChoice {
    /// One of the locations listed in the settings
    Named(String),
    /// Free-form location text for places the settings do not list
    Other(String),
}

impl LocationChoice {
    /// Resolve the choice to the concrete location string to persist
    ///
    /// Named choices must match one of `known`; both variants reject
    /// blank text. Surrounding whitespace is trimmed.
    pub fn resolve(&self, known: &[String]) -> BoardtrackResult<String> {
        match self {
            Self::Named(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(BoardtrackError::Validation("Location is required".into()));
                }
                if !known.iter().any(|candidate| candidate == name) {
                    return Err(BoardtrackError::Validation(format!(
                        "Unknown location: {}",
                        name
                    )));
                }
                Ok(name.to_string())
            }
            Self::Other(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(BoardtrackError::Validation("Location is required".into()));
                }
                Ok(text.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known_locations() -> Vec<String> {
        vec!["Dev room".to_string(), "Warehouse".to_string()]
    }

    #[test]
    fn test_named_location_resolves() {
        let choice = LocationChoice::Named("Dev room".into());
        assert_eq!(choice.resolve(&known_locations()).unwrap(), "Dev room");
    }

    #[test]
    fn test_named_location_must_be_known() {
        let choice = LocationChoice::Named("Broom closet".into());
        let err = choice.resolve(&known_locations()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Validation error: Unknown location: Broom closet");
    }

    #[test]
    fn test_other_location_is_trimmed() {
        let choice = LocationChoice::Other("  Bench 3  ".into());
        assert_eq!(choice.resolve(&known_locations()).unwrap(), "Bench 3");
    }

    #[test]
    fn test_blank_locations_rejected() {
        let named = LocationChoice::Named("   ".into());
        assert!(named.resolve(&known_locations()).unwrap_err().is_validation());

        let other = LocationChoice::Other(String::new());
        assert!(other.resolve(&known_locations()).unwrap_err().is_validation());
    }
}
