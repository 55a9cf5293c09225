//! bcrypt password hashing and verification.
//!
//! Hashes use cost 10 and the modular-crypt format (`$2b$10$...`). Hashes in
//! the `$2a$`/`$2y$` variants written by other bcrypt libraries verify too,
//! so existing admin rows keep working.

use std::sync::LazyLock;

/// bcrypt work factor for new hashes.
pub const BCRYPT_COST: u32 = 10;

/// Cost-10 hash of a throwaway secret, compared against when a login names
/// an unknown account so both failure paths run one bcrypt verification.
static DUMMY_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("unknown-account-placeholder").ok());

/// Hash a plaintext password with a random salt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// Returns `Ok(true)` if the password matches, `Ok(false)` if it does not.
/// A malformed stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(password, hash)
}

/// Spend one full bcrypt verification on `password` and discard the result.
///
/// Used on the unknown-username login path so its response time matches a
/// wrong password against a real hash.
pub fn verify_against_dummy(password: &str) {
    if let Some(hash) = DUMMY_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("mayaagency").expect("hashing should succeed");
        assert!(hash.starts_with("$2b$10$"), "expected cost-10 bcrypt prefix");
        assert!(verify_password("mayaagency", &hash).expect("verify should succeed"));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = hash_password("real-password").expect("hashing should succeed");
        let verified = verify_password("wrong-password", &hash).expect("verify should succeed");
        assert!(!verified);
    }

    #[test]
    fn test_2a_variant_verifies() {
        let hash = hash_password("legacy").expect("hashing should succeed");
        let legacy = hash.replacen("$2b$", "$2a$", 1);
        assert!(verify_password("legacy", &legacy).expect("verify should succeed"));
    }

    #[test]
    fn test_salts_differ() {
        let a = hash_password("same").unwrap();
        let b = hash_password("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_dummy_hash_has_production_cost() {
        let hash = DUMMY_HASH.as_deref().expect("dummy hash should be computed");
        assert!(hash.starts_with("$2b$10$"));
        assert!(!verify_password("mayaagency", hash).expect("verify should succeed"));
        // Must not panic regardless of input.
        verify_against_dummy("");
    }

    #[test]
    fn test_malformed_hash_is_error() {
        assert!(verify_password("anything", "not-a-bcrypt-hash").is_err());
    }
}
