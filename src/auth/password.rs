//! Password hashing
//!
//! Thin wrapper over bcrypt so the rest of the crate never touches the
//! hashing crate directly.

use crate::error::Result;

/// Hash a plaintext password for storage
pub fn hash_password(plaintext: &str) -> Result<String> {
    Ok(bcrypt::hash(plaintext, bcrypt::DEFAULT_COST)?)
}

/// Check a plaintext password against a stored hash
pub fn verify_password(plaintext: &str, hash: &str) -> Result<bool> {
    Ok(bcrypt::verify(plaintext, hash)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hash = hash_password("s3cret-pass").unwrap();
        assert_ne!(hash, "s3cret-pass");
        assert!(verify_password("s3cret-pass", &hash).unwrap());
        assert!(!verify_password("wrong-pass", &hash).unwrap());
    }
}
