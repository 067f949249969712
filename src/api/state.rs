//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::domain::CredentialHasher;
use crate::errors::AppResult;
use crate::infra::{StubUserStore, UserStore};
use crate::services::{JwtIssuer, RegistrationPolicy, RegistrationService, Registrar};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration: Arc<dyn RegistrationService>,
}

impl AppState {
    /// Wire the production collaborators from configuration.
    ///
    /// Fails when the hashing parameters or the signing secret are
    /// unusable, so bad configuration stops the process at startup.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::with_store(config, Arc::new(StubUserStore::new()))
    }

    /// Wire the service around a caller-supplied user store.
    pub fn with_store(config: &Config, store: Arc<dyn UserStore>) -> AppResult<Self> {
        let hasher = Arc::new(CredentialHasher::new(&config.hashing)?);
        let issuer = Arc::new(JwtIssuer::from_config(config)?);

        let registration = Arc::new(Registrar::new(
            hasher,
            store,
            issuer,
            RegistrationPolicy::from(config),
        ));

        Ok(Self::new(registration))
    }

    /// Create application state with a manually injected service.
    pub fn new(registration: Arc<dyn RegistrationService>) -> Self {
        Self { registration }
    }
}
