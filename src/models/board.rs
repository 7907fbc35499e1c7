//! Board model
//!
//! Represents a tracked evaluation board together with the typed input
//! callers submit when creating or updating one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BoardId;
use super::location::LocationChoice;
use crate::error::{BoardtrackError, BoardtrackResult};

/// A tracked inventory board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Unique identifier assigned by the ledger
    pub id: BoardId,

    /// Board name (e.g., "RZ/G2L-EVK"), unique among all boards
    pub name: String,

    /// Manufacturer serial number; unique when present
    pub serial_number: Option<String>,

    /// Where the board currently lives
    pub location: String,

    /// Who is currently responsible for the board
    pub custodian: String,

    /// Notes about this board
    #[serde(default)]
    pub notes: String,

    /// When the board was last written, as a display stamp
    pub updated_at: String,
}

impl Board {
    /// Create a board from validated fields
    pub fn new(
        id: BoardId,
        fields: BoardFields,
        custodian: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: fields.name,
            serial_number: fields.serial_number,
            location: fields.location,
            custodian: custodian.into(),
            notes: fields.notes,
            updated_at: updated_at.into(),
        }
    }

    /// Overwrite every caller-editable field
    pub fn apply(
        &mut self,
        fields: BoardFields,
        custodian: impl Into<String>,
        updated_at: impl Into<String>,
    ) {
        self.name = fields.name;
        self.serial_number = fields.serial_number;
        self.location = fields.location;
        self.custodian = custodian.into();
        self.notes = fields.notes;
        self.updated_at = updated_at.into();
    }

    /// Rewrite the custody fields only, as a bulk relocation does
    pub fn relocate(
        &mut self,
        location: impl Into<String>,
        custodian: impl Into<String>,
        updated_at: impl Into<String>,
    ) {
        self.location = location.into();
        self.custodian = custodian.into();
        self.updated_at = updated_at.into();
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.location)
    }
}

/// Caller-submitted fields for creating or updating a board
///
/// The custodian travels separately because it doubles as the actor
/// recorded on any history entry the write produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardInput {
    /// Requested board name
    pub name: String,

    /// Serial number; blank text collapses to `None`
    pub serial_number: Option<String>,

    /// Requested location
    pub location: LocationChoice,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,
}

impl BoardInput {
    /// Create an input with no serial number and empty notes
    pub fn new(name: impl Into<String>, location: LocationChoice) -> Self {
        Self {
            name: name.into(),
            serial_number: None,
            location,
            notes: String::new(),
        }
    }

    /// Attach a serial number
    pub fn with_serial(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the input and resolve it against the recognized locations
    ///
    /// Trims the name and serial number, collapses a blank serial to `None`,
    /// and resolves the location choice. Notes pass through untouched.
    pub fn into_fields(self, known_locations: &[String]) -> BoardtrackResult<BoardFields> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(BoardtrackError::Validation(
                "Board name cannot be empty".into(),
            ));
        }

        let location = self.location.resolve(known_locations)?;

        let serial_number = match self.serial_number {
            Some(serial) => {
                let serial = serial.trim();
                if serial.is_empty() {
                    None
                } else {
                    Some(serial.to_string())
                }
            }
            None => None,
        };

        Ok(BoardFields {
            name: name.to_string(),
            serial_number,
            location,
            notes: self.notes,
        })
    }
}

/// A [`BoardInput`] that passed validation, ready to persist
#[derive(Debug, Clone)]
pub struct BoardFields {
    pub name: String,
    pub serial_number: Option<String>,
    pub location: String,
    pub notes: String,
}
