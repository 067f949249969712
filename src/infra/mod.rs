//! Infrastructure layer - External systems integration
//!
//! Holds the user store boundary. Real persistence is an external
//! collaborator plugged in through the `UserStore` trait.

pub mod user_store;

pub use user_store::{StubUserStore, UserStore};
