// Password digest. Plain SHA-256 without a salt: identical passwords
// produce identical hashes across records.

use sha2::{Digest, Sha256};

/// Length of the hex-encoded digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Lowercase hex SHA-256 of the UTF-8 bytes of `password`.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}
