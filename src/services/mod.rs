//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod registration_service;
mod token_issuer;

pub use registration_service::{
    RegistrationPolicy, RegistrationResult, RegistrationService, Registrar,
};
pub use token_issuer::{Claims, Identity, JwtIssuer, SessionToken, TokenIssuer};
