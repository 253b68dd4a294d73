//! Outbound ports used by application services

/// Credential hashing.
///
/// The single production implementation is
/// [`BcryptHasher`](crate::infrastructure::crypto::password::BcryptHasher).
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String, String>;

    /// Verification errors (e.g. a malformed stored hash) count as a mismatch.
    fn verify(&self, password: &str, hash: &str) -> bool;
}
