//! User repository for JSON storage
//!
//! Manages loading and saving user accounts to users.json. Follows the
//! same commit discipline as the ledger: mutations run under the write
//! lock and are persisted or rolled back as a unit.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{BoardtrackError, BoardtrackResult};
use crate::models::{User, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user document
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UserDocument {
    /// Last user id handed out; 0 when no user was ever registered
    #[serde(default)]
    user_id_seq: i64,

    #[serde(default)]
    users: Vec<User>,
}

/// In-memory user store contents
#[derive(Debug, Clone, Default)]
pub struct UserState {
    user_id_seq: i64,
    users: BTreeMap<UserId, User>,
}

impl UserState {
    fn from_document(document: UserDocument) -> Self {
        let mut users = BTreeMap::new();
        for user in document.users {
            users.insert(user.id, user);
        }

        Self {
            user_id_seq: document.user_id_seq,
            users,
        }
    }

    fn to_document(&self) -> UserDocument {
        UserDocument {
            user_id_seq: self.user_id_seq,
            users: self.users.values().cloned().collect(),
        }
    }

    /// Hand out the next user id
    pub fn allocate_user_id(&mut self) -> UserId {
        self.user_id_seq += 1;
        UserId::new(self.user_id_seq)
    }

    /// Get a user by id
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    /// Get a mutable user by id
    pub fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Find a mutable user by username (exact, case-sensitive)
    pub fn user_by_username_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.values_mut().find(|u| u.username == username)
    }

    /// Insert or replace a user
    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    /// Remove a user
    pub fn remove_user(&mut self, id: UserId) -> Option<User> {
        self.users.remove(&id)
    }

    /// Check if a username is already taken (exact, case-sensitive)
    pub fn username_in_use(&self, username: &str) -> bool {
        self.users.values().any(|u| u.username == username)
    }
}

/// Repository for user persistence
pub struct UserRepository {
    path: PathBuf,
    state: RwLock<UserState>,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            state: RwLock::new(UserState::default()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> Result<(), BoardtrackError> {
        let document: UserDocument = read_json(&self.path)?;

        let mut state = self.state.write().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        *state = UserState::from_document(document);
        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> Result<(), BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        write_json_atomic(&self.path, &state.to_document())
    }

    /// Run a mutation as one unit of work, persisting or rolling back
    pub fn commit<T, F>(&self, op: F) -> BoardtrackResult<T>
    where
        F: FnOnce(&mut UserState) -> BoardtrackResult<T>,
    {
        let mut state = self.state.write().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let checkpoint = state.clone();
        let outcome = op(&mut state)
            .and_then(|value| write_json_atomic(&self.path, &state.to_document()).map(|_| value));

        if outcome.is_err() {
            *state = checkpoint;
        }

        outcome
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Result<Option<User>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.user(id).cloned())
    }

    /// Get a user by username (exact, case-sensitive)
    pub fn get_by_username(&self, username: &str) -> Result<Option<User>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    /// Get all users, ordered by id ascending
    pub fn list(&self) -> Result<Vec<User>, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.users.values().cloned().collect())
    }

    /// Count users
    pub fn count(&self) -> Result<usize, BoardtrackError> {
        let state = self.state.read().map_err(|e| {
            BoardtrackError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(state.users.len())
    }
}
