//! Credential hashing - Argon2id password hashing and verification.
//!
//! Hashes are PHC strings carrying their own salt and cost parameters, so
//! verification keeps working after the configured work factor changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

use crate::config::HashingConfig;
use crate::errors::HashingError;

/// Opaque output of [`CredentialHasher::hash`].
///
/// No equality; compare through [`CredentialHasher::verify`].
#[derive(Clone)]
pub struct HashedCredential {
    hash: String,
}

// Don't expose hash in debug output
impl std::fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedCredential")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl HashedCredential {
    /// Wrap an existing hash (e.g. read back from a store).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }
}

/// Salted, adaptive one-way password hasher.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self.argon2.params();
        f.debug_struct("CredentialHasher")
            .field("work_factor", &params.t_cost())
            .field("memory_kib", &params.m_cost())
            .field("parallelism", &params.p_cost())
            .finish()
    }
}

impl CredentialHasher {
    /// Build a hasher from cost parameters.
    ///
    /// # Errors
    /// Returns `HashingError::InvalidParams` when Argon2 rejects the
    /// combination (zero work factor, memory below 8 KiB per lane, ...).
    pub fn new(config: &HashingConfig) -> Result<Self, HashingError> {
        let params = Params::new(
            config.memory_kib,
            config.work_factor,
            config.parallelism,
            None,
        )
        .map_err(|e| HashingError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    pub fn hash(&self, plaintext: &str) -> Result<HashedCredential, HashingError> {
        if plaintext.is_empty() {
            return Err(HashingError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashingError::Backend(e.to_string()))?;

        Ok(HashedCredential {
            hash: hash.to_string(),
        })
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// Malformed hashes never verify.
    pub fn verify(&self, plaintext: &str, hashed: &HashedCredential) -> bool {
        match PasswordHash::new(hashed.as_str()) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hasher() -> CredentialHasher {
        CredentialHasher::new(&HashingConfig {
            work_factor: 1,
            memory_kib: 8,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let hasher = hasher();
        let hashed = hasher.hash("secret123").unwrap();

        assert_ne!(hashed.as_str(), "secret123");
        assert!(hashed.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify("secret123", &hashed));
        assert!(!hasher.verify("secret124", &hashed));
    }

    #[test]
    fn test_same_password_different_salts() {
        let hasher = hasher();
        let first = hasher.hash("SamePassword123").unwrap();
        let second = hasher.hash("SamePassword123").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(hasher.verify("SamePassword123", &first));
        assert!(hasher.verify("SamePassword123", &second));
    }

    #[test]
    fn test_different_passwords_different_hashes() {
        let hasher = hasher();
        let first = hasher.hash("Password123!").unwrap();
        let second = hasher.hash("Password456!").unwrap();

        assert_ne!(first.as_str(), second.as_str());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(matches!(hasher().hash(""), Err(HashingError::EmptyPassword)));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = CredentialHasher::new(&HashingConfig {
            work_factor: 0,
            memory_kib: 8,
            parallelism: 1,
        });
        assert!(matches!(result, Err(HashingError::InvalidParams(_))));
    }

    #[test]
    fn test_work_factor_encoded_in_hash() {
        let hasher = CredentialHasher::new(&HashingConfig {
            work_factor: 3,
            memory_kib: 8,
            parallelism: 1,
        })
        .unwrap();
        let hashed = hasher.hash("secret123").unwrap();

        assert!(hashed.as_str().contains("t=3"));
        // A hasher with other costs still verifies it.
        assert!(self::hasher().verify("secret123", &hashed));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let stored = HashedCredential::from_hash("secret123".to_string());
        assert!(!hasher().verify("secret123", &stored));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let hashed = hasher().hash("secret123").unwrap();
        let debug = format!("{:?}", hashed);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2id"));
    }

    #[test]
    fn test_default_config_accepted() {
        assert!(CredentialHasher::new(&HashingConfig::default()).is_ok());
    }
}
