//! Registration service - Orchestrates the user registration use case.
//!
//! Order of operations: reject empty password, hash, create the user in
//! the store, then (when enabled) issue a session token. Any failure aborts
//! the registration; nothing is retried.

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::token_issuer::{Identity, SessionToken, TokenIssuer};
use crate::config::Config;
use crate::domain::{CreatedUser, CredentialHasher, NewUser, RegistrationInput, UserRole};
use crate::errors::{AppError, AppResult};
use crate::infra::UserStore;

/// Outcome of a successful registration.
///
/// Which variant a process returns is fixed by `RegistrationPolicy` at
/// startup, never chosen per request.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RegistrationResult {
    /// Token issuance disabled: the created user is returned
    Created { user: CreatedUser },
    /// Token issuance enabled: a session token for the new user
    Token { token: SessionToken },
}

/// Static decisions applied to every registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationPolicy {
    /// Mint a session token after the user is created
    pub issue_token: bool,
    /// Role claim stamped into registration tokens
    pub role: UserRole,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        Self {
            issue_token: true,
            role: UserRole::User,
        }
    }
}

impl From<&Config> for RegistrationPolicy {
    fn from(config: &Config) -> Self {
        Self {
            issue_token: config.issue_token,
            role: config.registration_role,
        }
    }
}

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user
    async fn register(&self, input: RegistrationInput) -> AppResult<RegistrationResult>;
}

/// Concrete implementation of RegistrationService.
pub struct Registrar {
    hasher: Arc<CredentialHasher>,
    store: Arc<dyn UserStore>,
    issuer: Arc<dyn TokenIssuer>,
    policy: RegistrationPolicy,
}

impl Registrar {
    /// Create new registration service with its collaborators
    pub fn new(
        hasher: Arc<CredentialHasher>,
        store: Arc<dyn UserStore>,
        issuer: Arc<dyn TokenIssuer>,
        policy: RegistrationPolicy,
    ) -> Self {
        if policy.issue_token && policy.role.is_admin() {
            tracing::warn!("Registration tokens will carry the admin role");
        }

        Self {
            hasher,
            store,
            issuer,
            policy,
        }
    }

    /// Undo a user creation after a later step failed.
    ///
    /// Best effort: a failing delete is logged, the caller still reports
    /// the original error.
    async fn compensate(&self, id: Uuid) {
        match self.store.delete(id).await {
            Ok(()) => tracing::warn!(user_id = %id, "Rolled back user after token failure"),
            Err(e) => {
                tracing::error!(user_id = %id, "Failed to roll back user: {}", e)
            }
        }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, input: RegistrationInput) -> AppResult<RegistrationResult> {
        if input.password.is_empty() {
            tracing::warn!("Registration rejected: empty password");
            return Err(AppError::validation("Password must not be empty"));
        }

        let RegistrationInput {
            first_name,
            last_name,
            email,
            password,
        } = input;

        // Argon2 is CPU bound; keep it off the async workers
        let hasher = Arc::clone(&self.hasher);
        let hashed = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;

        let user = self
            .store
            .create(NewUser {
                first_name,
                last_name,
                email,
                password: hashed,
            })
            .await?;

        tracing::info!(user_id = %user.id, "User registered");

        if !self.policy.issue_token {
            return Ok(RegistrationResult::Created { user });
        }

        let identity = Identity {
            subject: user.id,
            role: self.policy.role,
        };

        match self.issuer.issue(&identity) {
            Ok(token) => Ok(RegistrationResult::Token { token }),
            Err(e) => {
                self.compensate(user.id).await;
                Err(e.into())
            }
        }
    }
}
