//! Password Digest
//! Mission: One-way transform of plaintext secrets for storage and comparison

use sha2::{Digest, Sha256};

/// SHA-256 digest of a plaintext secret, lowercase hex-encoded.
///
/// Deterministic and total: equal inputs always produce the same 64-char
/// string, and there is no failure path.
pub fn digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = digest("consistent_test");
        let b = digest("consistent_test");
        assert_eq!(a, b);
    }

    #[test]
    fn test_digest_is_fixed_length_hex() {
        for input in ["", "admin123", "päßwörd", "a very long passphrase indeed"] {
            let d = digest(input);
            assert_eq!(d.len(), 64);
            assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
            assert_ne!(d, input);
        }
    }

    #[test]
    fn test_different_inputs_differ() {
        assert_ne!(digest("admin123"), digest("admin124"));
        assert_ne!(digest("admin123"), digest("Admin123"));
    }
}
