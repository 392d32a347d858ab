/*
 * Responsibility
 * - Credential hashing and verification (argon2id)
 * - The stored hash string embeds algorithm, salt and parameters (PHC format)
 */
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::AppError;

pub fn hash(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "failed to hash credential");
            AppError::Internal
        })
}

/// Returns false for both a mismatched password and an unparsable stored
/// hash; callers must not distinguish the two.
pub fn verify(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        tracing::warn!("stored credential hash is not in PHC format");
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hashed = hash("12345@user").unwrap();
        assert!(verify("12345@user", &hashed));
    }

    #[test]
    fn wrong_password_is_rejected() {
        let hashed = hash("12345@user").unwrap();
        assert!(!verify("54321@user", &hashed));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let a = hash("12345@user").unwrap();
        let b = hash("12345@user").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn garbage_stored_hash_is_rejected() {
        assert!(!verify("12345@user", "not-a-phc-string"));
    }
}
