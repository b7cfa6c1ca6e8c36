//! Password digests.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Whether `candidate` hashes to `stored_hash` (hex, either case).
pub fn verify_password(stored_hash: &str, candidate: &str) -> bool {
    let actual = hash_password(candidate);
    // Constant time over equal-length digests.
    let expected = stored_hash.to_ascii_lowercase();
    actual.len() == expected.len()
        && actual
            .bytes()
            .zip(expected.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
}
