//! User store - Persistence boundary for newly registered users.
//!
//! The registration service only depends on the [`UserStore`] trait.
//! [`StubUserStore`] is the shipped implementation: it assigns identifiers
//! and reports success without persisting anything.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{CreatedUser, NewUser};
use crate::errors::StoreError;

/// User store trait for dependency injection.
///
/// Both operations are fallible; a real store is expected to raise
/// `StoreError::Conflict` on uniqueness violations.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user whose password is already hashed
    async fn create(&self, user: NewUser) -> Result<CreatedUser, StoreError>;

    /// Remove a user created earlier (compensation path)
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}

/// Non-persistent user store.
///
/// Every `create` succeeds with a fresh v4 identifier. No uniqueness
/// checks are performed.
#[derive(Debug, Default, Clone)]
pub struct StubUserStore;

impl StubUserStore {
    /// Create a new stub store
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UserStore for StubUserStore {
    async fn create(&self, user: NewUser) -> Result<CreatedUser, StoreError> {
        let created = CreatedUser {
            id: Uuid::new_v4(),
            name: user.display_name(),
        };

        tracing::debug!(user_id = %created.id, "User created in stub store");
        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        tracing::debug!(user_id = %id, "User removed from stub store");
        Ok(())
    }
}
