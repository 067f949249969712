//! Application settings loaded from environment variables.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use super::constants::{
    DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM, DEFAULT_HASH_WORK_FACTOR,
    DEFAULT_ISSUE_TOKEN, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_TOKEN_EXPIRY_SECONDS,
    MAX_TOKEN_EXPIRY_SECONDS, MIN_JWT_SECRET_LENGTH,
};
use crate::domain::UserRole;
use crate::errors::{AppError, AppResult, SigningError};

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConfig {
    /// Time cost (iterations)
    pub work_factor: u32,
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Degree of parallelism (lanes)
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            work_factor: DEFAULT_HASH_WORK_FACTOR,
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashingConfig {
    /// Load hashing parameters from environment variables.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load hashing parameters through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            work_factor: parse_var(&lookup, "HASH_WORK_FACTOR", DEFAULT_HASH_WORK_FACTOR)?,
            memory_kib: parse_var(&lookup, "HASH_MEMORY_KIB", DEFAULT_HASH_MEMORY_KIB)?,
            parallelism: parse_var(&lookup, "HASH_PARALLELISM", DEFAULT_HASH_PARALLELISM)?,
        })
    }
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    pub token_expiry_seconds: i64,
    pub issue_token: bool,
    pub registration_role: UserRole,
    pub hashing: HashingConfig,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_expiry_seconds", &self.token_expiry_seconds)
            .field("issue_token", &self.issue_token)
            .field("registration_role", &self.registration_role)
            .field("hashing", &self.hashing)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// A missing `JWT_SECRET` yields `SigningError::MissingSecret`; a short
    /// secret or an unparsable value yields `AppError::Config`. Both are
    /// meant to abort startup.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(SigningError::MissingSecret)?;

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        let token_expiry_seconds = match lookup("TOKEN_EXPIRY") {
            Some(raw) => parse_expiry(&raw)?,
            None => DEFAULT_TOKEN_EXPIRY_SECONDS,
        };

        let registration_role = match lookup("REGISTRATION_ROLE") {
            Some(raw) => raw
                .trim()
                .parse::<UserRole>()
                .map_err(|e| AppError::config(format!("REGISTRATION_ROLE is invalid: {}", e)))?,
            None => UserRole::User,
        };

        Ok(Self {
            jwt_secret,
            token_expiry_seconds,
            issue_token: parse_var(&lookup, "ISSUE_TOKEN", DEFAULT_ISSUE_TOKEN)?,
            registration_role,
            hashing: HashingConfig::from_lookup(&lookup)?,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::config(format!("{} is invalid: {}", key, e))),
        None => Ok(default),
    }
}

/// Parse a duration such as `3600s`, `60m`, `1h` or a bare number of seconds.
///
/// The result lies in `1..=MAX_TOKEN_EXPIRY_SECONDS`.
fn parse_expiry(raw: &str) -> AppResult<i64> {
    let raw = raw.trim();
    let invalid = || AppError::config(format!("TOKEN_EXPIRY is invalid: {:?}", raw));

    let (digits, multiplier) = match raw.chars().last() {
        Some('s') => (&raw[..raw.len() - 1], 1),
        Some('m') => (&raw[..raw.len() - 1], 60),
        Some('h') => (&raw[..raw.len() - 1], 3600),
        _ => (raw, 1),
    };

    let value: i64 = digits.parse().map_err(|_| invalid())?;
    if value <= 0 {
        return Err(invalid());
    }

    value
        .checked_mul(multiplier)
        .filter(|seconds| *seconds <= MAX_TOKEN_EXPIRY_SECONDS)
        .ok_or_else(invalid)
}
