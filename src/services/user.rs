//! User service
//!
//! Provides business logic for account administration: registration,
//! admin promotion and demotion, and account removal. Role gating is the
//! caller's job; the self-protection rules live here because every
//! caller must enforce them.

use crate::error::{BoardtrackError, BoardtrackResult};
use crate::models::{User, UserId};
use crate::storage::Storage;

/// Service for user administration
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// The credential arrives as an opaque hash produced by the identity
    /// layer. New users never start with admin rights.
    pub fn register(&self, username: &str, password_hash: &str) -> BoardtrackResult<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(BoardtrackError::Validation("Username cannot be empty".into()));
        }
        if password_hash.is_empty() {
            return Err(BoardtrackError::Validation(
                "A credential hash is required".into(),
            ));
        }

        self.storage.users.commit(|state| {
            if state.username_in_use(username) {
                return Err(BoardtrackError::duplicate_username(username));
            }

            let id = state.allocate_user_id();
            let user = User::new(id, username, password_hash);
            state.insert_user(user.clone());
            Ok(user)
        })
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> BoardtrackResult<Option<User>> {
        self.storage.users.get(id)
    }

    /// Get a user by exact username
    pub fn find_by_username(&self, username: &str) -> BoardtrackResult<Option<User>> {
        self.storage.users.get_by_username(username)
    }

    /// Get all users, ordered by id
    pub fn list(&self) -> BoardtrackResult<Vec<User>> {
        self.storage.users.list()
    }

    /// Grant admin rights to the named user
    pub fn promote_to_admin(&self, username: &str) -> BoardtrackResult<User> {
        self.storage.users.commit(|state| {
            let user = state
                .user_by_username_mut(username)
                .ok_or_else(|| BoardtrackError::user_not_found(username))?;
            user.promote();
            Ok(user.clone())
        })
    }

    /// Revoke admin rights from the target user
    ///
    /// An administrator cannot demote themselves; someone else must do it.
    pub fn demote_from_admin(&self, acting: UserId, target: UserId) -> BoardtrackResult<User> {
        if acting == target {
            return Err(BoardtrackError::SelfDemotion(self.display_name(acting)?));
        }

        self.storage.users.commit(|state| {
            let user = state
                .user_mut(target)
                .ok_or_else(|| BoardtrackError::user_not_found(target.to_string()))?;
            user.demote();
            Ok(user.clone())
        })
    }

    /// Remove the target user's account
    ///
    /// Users cannot remove their own account.
    pub fn delete(&self, acting: UserId, target: UserId) -> BoardtrackResult<()> {
        if acting == target {
            return Err(BoardtrackError::SelfDeletion(self.display_name(acting)?));
        }

        self.storage.users.commit(|state| {
            state
                .remove_user(target)
                .ok_or_else(|| BoardtrackError::user_not_found(target.to_string()))?;
            Ok(())
        })
    }

    /// Username for error messages, falling back to the raw id
    fn display_name(&self, id: UserId) -> BoardtrackResult<String> {
        Ok(self
            .storage
            .users
            .get(id)?
            .map(|user| user.username)
            .unwrap_or_else(|| id.to_string()))
    }
}
