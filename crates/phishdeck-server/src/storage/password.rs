// Credential hashing
// Decision: Argon2id with the crate defaults; parameters live in the hash
// string, so they can be raised later without invalidating stored hashes

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password into a PHC string with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC hash string.
/// Errors only when the stored hash itself is unparseable; a mismatched
/// password is `Ok(false)`.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_accepts_only_the_original() {
        let hash = hash_password("hunter2-but-longer").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("hunter2-but-longer", &hash).unwrap());
        assert!(!verify_password("hunter2-but-long", &hash).unwrap());
        assert!(!verify_password("", &hash).unwrap());
    }

    #[test]
    fn test_salts_make_hashes_unique() {
        let first = hash_password("repeat-after-me").unwrap();
        let second = hash_password("repeat-after-me").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("repeat-after-me", &second).unwrap());
    }

    #[test]
    fn test_garbage_stored_hash_is_an_error() {
        assert!(verify_password("anything", "not-a-phc-string").is_err());
    }
}
