//! Password hashing for admin credentials.
//!
//! bcrypt embeds a per-call salt and a tunable cost factor in the output
//! string, so stored hashes remain verifiable after the cost is raised.

use bcrypt::DEFAULT_COST;
use tracing::error;

/// Hash a plaintext password.
///
/// # Errors
///
/// Fails only when the hashing backend does, never because of the password
/// contents.
pub fn hash(plaintext: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plaintext, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
///
/// A mismatch returns `false`. A malformed stored hash also returns `false`,
/// logged server-side; wrong passwords must never surface as errors.
#[must_use]
pub fn verify(plaintext: &str, hash: &str) -> bool {
    match bcrypt::verify(plaintext, hash) {
        Ok(matches) => matches,
        Err(err) => {
            error!("Error verifying password hash: {err:?}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_round_trip() {
        let hashed = hash("secret123").unwrap();
        assert!(verify("secret123", &hashed));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hashed = hash("secret123").unwrap();
        assert!(!verify("wrong", &hashed));
    }

    #[test]
    fn test_salt_is_per_call() {
        // same input, different salt, different output
        assert_ne!(hash("secret123").unwrap(), hash("secret123").unwrap());
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify("secret123", "not-a-bcrypt-hash"));
    }
}
