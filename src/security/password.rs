/// Password hashing and verification using Argon2id
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, Result};

/// Hash a password using Argon2id with a fresh random salt.
///
/// Returns a PHC-formatted hash string safe for database storage.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    Ok(argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
        .to_string())
}

/// Verify a password against its stored hash.
///
/// Comparison inside `argon2` is constant-time. A malformed stored hash is a
/// verification failure, never a panic or an error escape.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(password_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hash = hash_password("secret1").expect("should hash password");
        assert!(verify_password("secret1", &hash));
    }

    #[test]
    fn wrong_password_rejected() {
        let hash = hash_password("secret1").expect("should hash password");
        assert!(!verify_password("secret2", &hash));
    }

    #[test]
    fn different_hashes_for_same_password() {
        let hash1 = hash_password("secret1").expect("should hash password");
        let hash2 = hash_password("secret1").expect("should hash password");
        // Different salts should produce different hashes
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn malformed_stored_hash_fails_verification() {
        assert!(!verify_password("secret1", "not-a-phc-string"));
        assert!(!verify_password("secret1", ""));
    }
}
