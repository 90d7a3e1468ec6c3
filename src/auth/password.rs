use bcrypt::{BcryptError, DEFAULT_COST, hash, verify};

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, BcryptError> {
    verify(password, stored_hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low cost keeps the test fast; production uses DEFAULT_COST.
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_round_trip() {
        let hashed = bcrypt::hash("Password123", TEST_COST).unwrap();
        assert!(verify_password("Password123", &hashed).unwrap());
        assert!(!verify_password("password123", &hashed).unwrap());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("whatever", "not-a-bcrypt-hash").is_err());
    }
}
