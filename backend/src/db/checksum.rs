//! Content checksums used to skip re-importing identical dataset files.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of a dataset file's content.
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let content = r#"[{"id": 1, "name": "Hawks"}]"#;
        assert_eq!(calculate_checksum(content), calculate_checksum(content));
    }

    #[test]
    fn test_different_content_different_checksum() {
        let checksum1 = calculate_checksum(r#"[{"id": 1}]"#);
        let checksum2 = calculate_checksum(r#"[{"id": 2}]"#);
        assert_ne!(checksum1, checksum2);
    }

    #[test]
    fn test_checksum_is_hex_sha256() {
        let checksum = calculate_checksum("");
        assert_eq!(checksum.len(), 64);
        assert_eq!(
            checksum,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
