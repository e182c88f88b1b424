//! Content digests for ledger entries.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest.
pub const CONTENT_HASH_LEN: usize = 12;

/// First [`CONTENT_HASH_LEN`] lowercase hex characters of the SHA-256 of `content`.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let mut hex = hex::encode(hasher.finalize());
    hex.truncate(CONTENT_HASH_LEN);
    hex
}
