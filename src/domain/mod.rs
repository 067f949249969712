//! Domain layer - Core registration types and credential handling
//!
//! Contains the user types exchanged with the user store and the
//! credential hasher. No HTTP or storage concerns live here.

pub mod credential;
pub mod user;

pub use credential::{CredentialHasher, HashedCredential};
pub use user::{CreatedUser, NewUser, RegistrationInput, UserRole};
