//! In-memory user registry

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::user::USER_ID_LENGTH;
use crate::domain::{validate_new_user, DomainError, UpdateUser, User, UserId};

/// CRUD registry for user records
///
/// State lives purely in process memory; restarting discards all users.
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: RwLock<HashMap<String, User>>,
}

impl UserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new user with a freshly generated identifier
    ///
    /// Fails with a validation error when username or email is empty.
    pub fn create(&self, username: &str, email: &str) -> Result<User, DomainError> {
        validate_new_user(username, email)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let mut users = self.users.write().map_err(lock_error)?;

        // The 8-hex-char space makes collisions unlikely but not impossible;
        // regenerate until the identifier is unused.
        let id = loop {
            let candidate = generate_user_id();
            if !users.contains_key(candidate.as_str()) {
                break candidate;
            }
        };

        let user = User::new(id, username, email);
        users.insert(user.id().as_str().to_string(), user.clone());

        Ok(user)
    }

    /// Get a user by ID
    pub fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().map_err(lock_error)?;
        Ok(users.get(id).cloned())
    }

    /// Apply a partial update to a user and stamp the update timestamp
    pub fn update(&self, id: &str, update: UpdateUser) -> Result<User, DomainError> {
        if update.username.as_deref() == Some("") {
            return Err(DomainError::validation("Username cannot be empty"));
        }

        if update.email.as_deref() == Some("") {
            return Err(DomainError::validation("Email cannot be empty"));
        }

        let mut users = self.users.write().map_err(lock_error)?;

        let user = users
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        if let Some(username) = update.username {
            user.set_username(username);
        }

        if let Some(email) = update.email {
            user.set_email(email);
        }

        if let Some(status) = update.status {
            user.set_status(status);
        }

        user.touch();

        Ok(user.clone())
    }

    /// Delete a user, returning whether a record existed
    pub fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut users = self.users.write().map_err(lock_error)?;
        Ok(users.remove(id).is_some())
    }
}

/// Derive a fresh identifier from the current time and a random token
fn generate_user_id() -> UserId {
    let mut token = [0u8; 8];
    rand::thread_rng().fill_bytes(&mut token);

    let mut hasher = Sha256::new();
    hasher.update(
        Utc::now()
            .timestamp_nanos_opt()
            .unwrap_or_default()
            .to_le_bytes(),
    );
    hasher.update(token);

    let digest = hex::encode(hasher.finalize());

    // The digest is lowercase hex, so the truncation always validates.
    UserId::new(&digest[..USER_ID_LENGTH]).expect("hex digest prefix is a valid user id")
}

fn lock_error<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::internal(format!("Failed to acquire registry lock: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserStatus;

    #[test]
    fn test_create_user_success() {
        let registry = UserRegistry::new();
        let user = registry.create("testuser", "test@example.com").unwrap();

        assert_eq!(user.id().as_str().len(), 8);
        assert_eq!(user.username(), "testuser");
        assert_eq!(user.email(), "test@example.com");
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn test_create_user_missing_data() {
        let registry = UserRegistry::new();

        assert!(matches!(
            registry.create("", "test@example.com"),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            registry.create("testuser", ""),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_get_user_round_trip() {
        let registry = UserRegistry::new();
        let created = registry.create("testuser", "test@example.com").unwrap();

        let retrieved = registry.get(created.id().as_str()).unwrap();
        assert_eq!(retrieved, Some(created));
    }

    #[test]
    fn test_get_user_not_exists() {
        let registry = UserRegistry::new();
        assert_eq!(registry.get("deadbeef").unwrap(), None);
    }

    #[test]
    fn test_update_user_success() {
        let registry = UserRegistry::new();
        let user = registry.create("testuser", "test@example.com").unwrap();

        let updated = registry
            .update(
                user.id().as_str(),
                UpdateUser {
                    username: Some("newuser".to_string()),
                    ..UpdateUser::default()
                },
            )
            .unwrap();

        assert_eq!(updated.username(), "newuser");
        assert_eq!(updated.email(), "test@example.com");
        assert!(updated.updated_at().is_some());
    }

    #[test]
    fn test_update_user_not_exists() {
        let registry = UserRegistry::new();

        let result = registry.update(
            "deadbeef",
            UpdateUser {
                username: Some("newuser".to_string()),
                ..UpdateUser::default()
            },
        );

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_update_rejects_empty_fields() {
        let registry = UserRegistry::new();
        let user = registry.create("testuser", "test@example.com").unwrap();

        let result = registry.update(
            user.id().as_str(),
            UpdateUser {
                username: Some(String::new()),
                ..UpdateUser::default()
            },
        );

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[test]
    fn test_delete_user() {
        let registry = UserRegistry::new();
        let user = registry.create("testuser", "test@example.com").unwrap();

        assert!(registry.delete(user.id().as_str()).unwrap());
        assert_eq!(registry.get(user.id().as_str()).unwrap(), None);
        assert!(!registry.delete(user.id().as_str()).unwrap());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let registry = UserRegistry::new();

        let first = registry.create("a", "a@example.com").unwrap();
        let second = registry.create("b", "b@example.com").unwrap();

        assert_ne!(first.id(), second.id());
    }
}
