//! Password hashing
//!
//! New hashes use the configured algorithm (bcrypt by default, cost 10).
//! Verification looks at the stored hash's prefix, so accounts created
//! under either algorithm keep working after the setting changes.
//!
//! Both algorithms are CPU-intensive; async callers go through
//! `hash_async`/`verify_async`, which run on the blocking thread pool.

use crate::config::{AuthConfig, HashAlgorithm};
use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::sync::OnceLock;

/// Input hashed once to stand in for a missing account's stored hash
const UNKNOWN_ACCOUNT_PASSWORD: &str = "fitforge-unknown-account";

static UNKNOWN_ACCOUNT_HASH: OnceLock<String> = OnceLock::new();

/// Password hashing service
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    algorithm: HashAlgorithm,
    bcrypt_cost: u32,
}

impl PasswordService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            algorithm: config.hash_algorithm,
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// Algorithm used for new hashes
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Hash a password with a fresh random salt (blocking operation)
    pub fn hash(&self, password: &str) -> Result<String> {
        match self.algorithm {
            HashAlgorithm::Bcrypt => bcrypt::hash(password, self.bcrypt_cost)
                .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e)),
            HashAlgorithm::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                let hash = Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
                Ok(hash.to_string())
            }
        }
    }

    /// Hash a password on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String> {
        let service = *self;
        tokio::task::spawn_blocking(move || service.hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a stored hash (blocking operation)
    ///
    /// Returns `Ok(false)` for a wrong password and `Err` when the stored
    /// hash is unreadable, including a PHC string with no salt or digest.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        if hash.starts_with("$argon2") {
            let parsed = PasswordHash::new(hash)
                .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
            if parsed.salt.is_none() || parsed.hash.is_none() {
                anyhow::bail!("Invalid hash format: missing salt or digest");
            }
            return Ok(Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok());
        }

        bcrypt::verify(password, hash).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password on the blocking thread pool
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Spend the cost of one verification when the username does not exist
    ///
    /// Keeps "unknown user" as slow as "wrong password". The comparison
    /// hash is made once per process with the configured algorithm.
    pub async fn verify_unknown_account(&self, password: String) -> Result<()> {
        let service = *self;
        tokio::task::spawn_blocking(move || {
            let hash = match UNKNOWN_ACCOUNT_HASH.get() {
                Some(hash) => hash,
                None => {
                    let fresh = service.hash(UNKNOWN_ACCOUNT_PASSWORD)?;
                    UNKNOWN_ACCOUNT_HASH.get_or_init(|| fresh)
                }
            };
            Self::verify(&password, hash).map(|_| ())
        })
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
