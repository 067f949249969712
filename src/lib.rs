//! Registration API - user registration with hashed credentials
//!
//! Accepts registration data over HTTP, hashes the password with Argon2id,
//! hands the user to a `UserStore` and optionally issues a signed JWT
//! session token for the new identity.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Registration types and credential hashing
//! - **services**: Registration use case and token issuance
//! - **infra**: User store boundary
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! JWT_SECRET=... cargo run -- serve
//!
//! # Hash a password with the configured work factor
//! cargo run -- hash 'correct horse battery staple'
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CredentialHasher, HashedCredential, UserRole};
pub use errors::{AppError, AppResult};
