//! Manifest-backed change detection.
//!
//! [`ManifestDetector`] ties the change manifest, the artifact repository,
//! and input fingerprinting into a [`ChangeDetector`] for the tracker.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regen_common::ChangeStrategy;
use regen_tracker::{ChangeDetector, InputReference, TrackerError};
use tracing::{debug, info};

use crate::error::CacheError;
use crate::hasher::InputHasher;
use crate::manifest::{ChangeManifest, InputRecord};
use crate::repository::ArtifactRepository;

/// Change detector backed by a persisted [`ChangeManifest`].
///
/// Relative file references are resolved against the project directory and
/// artifact references through an [`ArtifactRepository`]. An input that is
/// missing from the manifest counts as changed.
pub struct ManifestDetector {
    /// Root directory for cache files.
    cache_dir: PathBuf,

    /// Directory relative file references are resolved against.
    base_dir: PathBuf,

    /// The change record.
    manifest: ChangeManifest,

    /// Where artifact references are looked up.
    repository: ArtifactRepository,

    /// How file changes are detected.
    strategy: ChangeStrategy,
}

impl ManifestDetector {
    /// Loads an existing manifest from `cache_dir` or starts a fresh one.
    ///
    /// A missing, corrupt, or version-mismatched manifest yields an empty
    /// record, so every input reports changed.
    pub fn load_or_create(
        cache_dir: &Path,
        base_dir: &Path,
        tool_version: &str,
        repository: ArtifactRepository,
        strategy: ChangeStrategy,
    ) -> Self {
        let manifest = ChangeManifest::load(cache_dir)
            .filter(|m| {
                let compatible = m.is_compatible(tool_version);
                if !compatible {
                    info!(
                        found = %m.tool_version,
                        expected = tool_version,
                        "change manifest version mismatch, starting fresh"
                    );
                }
                compatible
            })
            .unwrap_or_else(|| ChangeManifest::new(tool_version));

        Self {
            cache_dir: cache_dir.to_path_buf(),
            base_dir: base_dir.to_path_buf(),
            manifest,
            repository,
            strategy,
        }
    }

    /// Resolves a reference to the file it denotes.
    pub fn resolve(&self, reference: &InputReference) -> Result<PathBuf, TrackerError> {
        match reference {
            InputReference::File(path) => {
                let full = if path.is_absolute() {
                    path.clone()
                } else {
                    self.base_dir.join(path)
                };
                if full.is_file() {
                    Ok(full)
                } else {
                    Err(TrackerError::unresolved(
                        reference,
                        format!("no such file {}", full.display()),
                    ))
                }
            }
            InputReference::Artifact(coord) => self.repository.locate(coord),
        }
    }

    /// Fingerprints `reference` as it currently exists on disk.
    fn record_for(&self, reference: &InputReference) -> Result<InputRecord, TrackerError> {
        let resolved = self.resolve(reference)?;
        let unresolved = |e: CacheError| TrackerError::unresolved(reference, e.to_string());
        let stamp = InputHasher::stamp(&resolved).map_err(unresolved)?;
        let content_hash = InputHasher::hash_file(&resolved).map_err(unresolved)?;
        Ok(InputRecord {
            resolved,
            content_hash,
            stamp,
        })
    }

    /// Removes the record for `reference`, so it reports changed next time.
    ///
    /// Returns `true` if a record was present.
    pub fn forget(&mut self, reference: &InputReference) -> bool {
        self.manifest.inputs.remove(&reference.to_string()).is_some()
    }

    /// Drops records whose key is not in `live`. Returns how many were removed.
    pub fn prune(&mut self, live: &HashSet<String>) -> usize {
        let before = self.manifest.inputs.len();
        self.manifest.inputs.retain(|key, _| live.contains(key));
        let removed = before - self.manifest.inputs.len();
        if removed > 0 {
            debug!(removed, "pruned records for inputs no longer configured");
        }
        removed
    }

    /// Persists the manifest to the cache directory.
    pub fn save(&self) -> Result<(), CacheError> {
        self.manifest.save(&self.cache_dir)
    }

    /// Returns a reference to the current change manifest.
    pub fn manifest(&self) -> &ChangeManifest {
        &self.manifest
    }

    /// Returns the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Returns the active change-detection strategy.
    pub fn strategy(&self) -> ChangeStrategy {
        self.strategy
    }
}

impl ChangeDetector for ManifestDetector {
    fn has_changed(&self, reference: &InputReference) -> Result<bool, TrackerError> {
        let resolved = self.resolve(reference)?;
        let Some(previous) = self.manifest.inputs.get(&reference.to_string()) else {
            debug!(input = %reference, "no record, treating as changed");
            return Ok(true);
        };

        let unresolved = |e: CacheError| TrackerError::unresolved(reference, e.to_string());
        match self.strategy {
            // Stamps can match across a real edit (`cp -p`, coarse mtimes),
            // so content mode always hashes.
            ChangeStrategy::Content => {
                let hash = InputHasher::hash_file(&resolved).map_err(unresolved)?;
                Ok(hash != previous.content_hash)
            }
            ChangeStrategy::Modified => {
                let stamp = InputHasher::stamp(&resolved).map_err(unresolved)?;
                Ok(previous.resolved != resolved || stamp != previous.stamp)
            }
        }
    }

    fn mark_seen(&mut self, reference: &InputReference) -> Result<(), TrackerError> {
        let record = self.record_for(reference)?;
        debug!(input = %reference, hash = %record.content_hash, "recording input");
        self.manifest.inputs.insert(reference.to_string(), record);
        Ok(())
    }
}
