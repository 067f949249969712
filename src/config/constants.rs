//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Session tokens
// =============================================================================

/// Default token validity window in seconds
pub const DEFAULT_TOKEN_EXPIRY_SECONDS: i64 = 3600;

/// Longest accepted token validity window (365 days)
pub const MAX_TOKEN_EXPIRY_SECONDS: i64 = 365 * 24 * 3600;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

/// Tokens are issued by default after a successful registration
pub const DEFAULT_ISSUE_TOKEN: bool = true;

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Password hashing (Argon2id)
// =============================================================================

/// Default work factor (Argon2 time cost, in iterations)
pub const DEFAULT_HASH_WORK_FACTOR: u32 = 10;

/// Default memory cost in KiB (19 MiB)
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19_456;

/// Default degree of parallelism
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
