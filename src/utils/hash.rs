use sha2::{Digest, Sha256};

/// Hex SHA-256 of file contents, used to tell vendored library revisions apart.
pub fn content_hash(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}
