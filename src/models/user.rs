//! User model
//!
//! Represents a registered account. The stored credential is an opaque
//! salted hash produced by the identity layer; this crate never hashes
//! or verifies passwords.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// A registered user account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store
    pub id: UserId,

    /// Login name, unique among all users
    pub username: String,

    /// Opaque credential hash supplied by the identity layer
    pub password_hash: String,

    /// Whether this user may administer other accounts
    #[serde(default)]
    pub is_admin: bool,
}

impl User {
    /// Create a new non-admin user
    pub fn new(id: UserId, username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            is_admin: false,
        }
    }

    /// Grant administrator rights
    pub fn promote(&mut self) {
        self.is_admin = true;
    }

    /// Revoke administrator rights
    pub fn demote(&mut self) {
        self.is_admin = false;
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.username)
    }
}
