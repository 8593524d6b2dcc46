use pbkdf2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use pbkdf2::Pbkdf2;
use rand_core::OsRng;

use crate::error::{ApiError, ApiResult};

/// Credential-verification seam
///
/// The external contract (cédula + password → session) stays the same as
/// the legacy portal; only the storage and comparison mechanism behind
/// this trait changed from plaintext to hashed.
pub trait CredentialVerifier: Send + Sync {
    /// Produce the storable form of a password
    fn hash_password(&self, password: &str) -> ApiResult<String>;

    /// Check a candidate password against the stored form
    ///
    /// Returns `false` both for a mismatch and for an unparseable stored
    /// value; a login must never panic on bad stored data.
    fn verify_password(&self, password: &str, stored: &str) -> bool;
}

/// PBKDF2-SHA256 verifier producing PHC-format hash strings
///
/// Verification goes through the `password-hash` verifier, which compares
/// digests in constant time.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pbkdf2Verifier;

impl CredentialVerifier for Pbkdf2Verifier {
    fn hash_password(&self, password: &str) -> ApiResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        Pbkdf2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::InternalError(format!("Failed to hash password: {e}")))
    }

    fn verify_password(&self, password: &str, stored: &str) -> bool {
        match PasswordHash::new(stored) {
            Ok(parsed) => Pbkdf2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        }
    }
}
