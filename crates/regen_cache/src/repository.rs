//! Resolution of artifact coordinates to files in a local repository.

use std::path::{Path, PathBuf};

use regen_tracker::{ArtifactCoordinate, TrackerError};

/// A local artifact repository using the conventional directory layout:
/// `<root>/<group as dirs>/<artifact>/<version>/<artifact>-<version>[-<classifier>].<type>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRepository {
    root: PathBuf,
}

impl ArtifactRepository {
    /// Creates a repository rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The per-user repository at `$HOME/.m2/repository`.
    pub fn default_local() -> Self {
        let home = std::env::var_os("HOME").unwrap_or_else(|| ".".into());
        Self::new(Path::new(&home).join(".m2").join("repository"))
    }

    /// Returns the repository root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Computes where `coord` lives, without checking that it exists.
    pub fn resolve(&self, coord: &ArtifactCoordinate) -> PathBuf {
        let mut path = self.root.clone();
        for segment in coord.group.split('.') {
            path.push(segment);
        }
        path.push(&coord.artifact);
        path.push(&coord.version);
        path.push(coord.file_name());
        path
    }

    /// Resolves `coord` to an existing file.
    pub fn locate(&self, coord: &ArtifactCoordinate) -> Result<PathBuf, TrackerError> {
        let path = self.resolve(coord);
        if path.is_file() {
            Ok(path)
        } else {
            Err(TrackerError::unresolved(
                coord,
                format!("artifact not found at {}", path.display()),
            ))
        }
    }
}
