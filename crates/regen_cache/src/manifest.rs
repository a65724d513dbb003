//! The persisted change record.
//!
//! Stored as `manifest.json` in the cache directory. Each entry is keyed by
//! the display form of an input reference and records the content hash and
//! file stamp observed when the input was last marked current.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use regen_common::ContentHash;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CacheError;
use crate::hasher::FileStamp;

/// Name of the manifest file within the cache directory.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Top-level change manifest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeManifest {
    /// Tool version that produced this manifest. Invalidate on version change.
    pub tool_version: String,

    /// Per-input state, keyed by reference display string.
    pub inputs: BTreeMap<String, InputRecord>,
}

/// State of a single input when it was last marked current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    /// The file the reference resolved to.
    pub resolved: PathBuf,

    /// Content hash at the time the input was marked current.
    pub content_hash: ContentHash,

    /// File stamp at the time the input was marked current.
    pub stamp: FileStamp,
}

impl ChangeManifest {
    /// Creates an empty manifest for the given tool version.
    pub fn new(tool_version: &str) -> Self {
        Self {
            tool_version: tool_version.to_string(),
            inputs: BTreeMap::new(),
        }
    }

    /// Path of the manifest file inside `cache_dir`.
    pub fn path(cache_dir: &Path) -> PathBuf {
        cache_dir.join(MANIFEST_FILE)
    }

    /// Reads the manifest from `cache_dir`.
    ///
    /// Returns `Ok(None)` if no manifest exists yet.
    pub fn read(cache_dir: &Path) -> Result<Option<Self>, CacheError> {
        let path = Self::path(cache_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(CacheError::io(path, e)),
        };
        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| CacheError::ManifestParse {
                reason: e.to_string(),
            })
    }

    /// Loads the manifest, returning `None` if it is missing or unreadable.
    ///
    /// Fail-safe: a corrupt manifest means every input is treated as changed.
    pub fn load(cache_dir: &Path) -> Option<Self> {
        match Self::read(cache_dir) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(error = %e, "discarding unreadable change manifest");
                None
            }
        }
    }

    /// Saves the manifest to `cache_dir`, creating the directory if needed.
    ///
    /// Writes to a sibling temporary file first and renames it into place.
    pub fn save(&self, cache_dir: &Path) -> Result<(), CacheError> {
        std::fs::create_dir_all(cache_dir).map_err(|e| CacheError::io(cache_dir, e))?;
        let path = Self::path(cache_dir);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(self).map_err(|e| CacheError::Serialization {
            reason: e.to_string(),
        })?;
        std::fs::write(&tmp, json).map_err(|e| CacheError::io(&tmp, e))?;
        std::fs::rename(&tmp, &path).map_err(|e| CacheError::io(path, e))
    }

    /// Returns `true` if this manifest was produced by a compatible version.
    pub fn is_compatible(&self, current_version: &str) -> bool {
        self.tool_version == current_version
    }
}
