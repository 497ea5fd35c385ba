use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher;
use argon2::password_hash::PasswordVerifier as Argon2PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Credential verification against stored one-way hashes.
///
/// Compares a plaintext secret to an Argon2id hash in PHC string format.
/// The comparison is slow and salted; the underlying verification is
/// constant-time with respect to the hash bytes.
pub struct PasswordVerifier;

impl PasswordVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Verify a plaintext secret against a stored hash.
    ///
    /// Distinguishes a completed comparison (`Ok(true)`/`Ok(false)`) from a
    /// structural failure such as an unparsable stored hash (`Err`). Callers
    /// that authenticate users collapse both `Ok(false)` and `Err` into the
    /// same invalid-credentials outcome so neither failure mode leaks.
    ///
    /// # Errors
    /// * `VerificationFailed` - stored hash is not a valid PHC string
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        let argon2 = Argon2::default();

        Ok(argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a plaintext secret for storage.
    ///
    /// Uses Argon2id with a freshly generated random salt. This service
    /// never stores credentials itself; provisioning tooling and tests use
    /// this to produce directory-compatible hashes.
    ///
    /// # Errors
    /// * `HashingFailed` - hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }
}

impl Default for PasswordVerifier {
    fn default() -> Self {
        Self::new()
    }
}
