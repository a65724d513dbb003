//! Input fingerprinting: content hashes and cheap file stamps.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::UNIX_EPOCH;

use regen_common::ContentHash;
use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Cheap metadata fingerprint of a file: modification time and length.
///
/// The `modified` strategy compares stamps instead of hashes. The modification
/// time is `None` on platforms or filesystems that do not report one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStamp {
    /// Milliseconds since the Unix epoch.
    pub modified_ms: Option<u64>,
    /// File length in bytes.
    pub len: u64,
}

/// Utility for fingerprinting input files.
pub struct InputHasher;

impl InputHasher {
    /// Computes the XXH3-128 content hash of a file, streaming its contents.
    pub fn hash_file(path: &Path) -> Result<ContentHash, CacheError> {
        let file = File::open(path).map_err(|e| CacheError::io(path, e))?;
        ContentHash::from_reader(BufReader::new(file)).map_err(|e| CacheError::io(path, e))
    }

    /// Reads the stamp of a file without touching its contents.
    pub fn stamp(path: &Path) -> Result<FileStamp, CacheError> {
        let meta = std::fs::metadata(path).map_err(|e| CacheError::io(path, e))?;
        if !meta.is_file() {
            return Err(CacheError::io(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        let modified_ms = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64);
        Ok(FileStamp {
            modified_ms,
            len: meta.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_file_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.wsdl");
        std::fs::write(&path, "<definitions name=\"a\"/>").unwrap();

        let h1 = InputHasher::hash_file(&path).unwrap();
        let h2 = InputHasher::hash_file(&path).unwrap();
        assert_eq!(h1, h2);
        assert_eq!(h1, ContentHash::from_bytes(b"<definitions name=\"a\"/>"));
    }

    #[test]
    fn hash_file_different_content() {
        let dir = tempfile::tempdir().unwrap();
        let path_a = dir.path().join("a.wsdl");
        let path_b = dir.path().join("b.wsdl");
        std::fs::write(&path_a, "<definitions name=\"a\"/>").unwrap();
        std::fs::write(&path_b, "<definitions name=\"b\"/>").unwrap();

        assert_ne!(
            InputHasher::hash_file(&path_a).unwrap(),
            InputHasher::hash_file(&path_b).unwrap()
        );
    }

    #[test]
    fn hash_file_nonexistent_errors() {
        let result = InputHasher::hash_file(Path::new("/nonexistent/file.wsdl"));
        assert!(matches!(result, Err(CacheError::Io { .. })));
    }

    #[test]
    fn stamp_reports_length() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("binding.xml");
        std::fs::write(&path, "12345").unwrap();

        let stamp = InputHasher::stamp(&path).unwrap();
        assert_eq!(stamp.len, 5);
        assert!(stamp.modified_ms.is_some());
    }

    #[test]
    fn stamp_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(InputHasher::stamp(dir.path()).is_err());
    }
}
