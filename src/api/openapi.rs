//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::auth_handler;
use crate::domain::CreatedUser;
use crate::services::{RegistrationResult, SessionToken};

/// OpenAPI documentation for the Registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        version = "0.1.0",
        description = "User registration with Argon2id password hashing and JWT session tokens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(auth_handler::register),
    components(
        schemas(
            auth_handler::RegisterRequest,
            RegistrationResult,
            CreatedUser,
            SessionToken,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration")
    )
)]
pub struct ApiDoc;
