//! BLAKE3 hashing for profile backup naming

use std::path::Path;

use blake3::Hasher;

use crate::error::{DevupError, Result};

/// Short content hash used in backup file names
pub fn short_hash(content: &[u8]) -> String {
    let mut hasher = Hasher::new();
    hasher.update(content);
    hasher.finalize().to_hex()[..8].to_string()
}

/// Short hash of a file's content
pub fn short_hash_file(path: &Path) -> Result<String> {
    let content = std::fs::read(path).map_err(|e| DevupError::FileReadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    Ok(short_hash(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_short_hash_is_stable() {
        assert_eq!(short_hash(b"hello"), short_hash(b"hello"));
        assert_ne!(short_hash(b"hello"), short_hash(b"world"));
        assert_eq!(short_hash(b"hello").len(), 8);
    }

    #[test]
    fn test_short_hash_file_matches_content_hash() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile");
        std::fs::write(&path, "export EDITOR=nvim\n").unwrap();

        assert_eq!(
            short_hash_file(&path).unwrap(),
            short_hash(b"export EDITOR=nvim\n")
        );
    }

    #[test]
    fn test_short_hash_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = short_hash_file(&temp.path().join("nope")).unwrap_err();
        assert!(matches!(err, DevupError::FileReadFailed { .. }));
    }
}
