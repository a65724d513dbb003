//! Shared pipeline helpers for CLI commands.
//!
//! Project root resolution, loading configuration and generation units, and
//! opening the manifest-backed change detector.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use regen_cache::{ArtifactRepository, ManifestDetector};
use regen_config::{ProjectConfig, CONFIG_FILE};
use regen_tracker::{GenerationUnit, GenerationUnitSource};
use tracing::debug;

use crate::GlobalArgs;

/// Version recorded in the change manifest; a mismatch discards old records.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a command needs about the current project.
pub struct Project {
    /// Directory containing `regen.toml`.
    pub dir: PathBuf,
    /// The parsed configuration.
    pub config: ProjectConfig,
    /// Generation units in evaluation order.
    pub units: Vec<GenerationUnit>,
}

impl Project {
    /// Opens the change detector configured for this project.
    pub fn open_detector(&self) -> ManifestDetector {
        let repository = match &self.config.cache.repository {
            Some(root) => ArtifactRepository::new(self.dir.join(root)),
            None => ArtifactRepository::default_local(),
        };
        debug!(repository = %repository.root().display(), "artifact repository");
        ManifestDetector::load_or_create(
            &self.cache_dir(),
            &self.dir,
            TOOL_VERSION,
            repository,
            self.config.cache.strategy,
        )
    }

    /// Absolute cache directory.
    pub fn cache_dir(&self) -> PathBuf {
        self.dir.join(&self.config.cache.dir)
    }

    /// Absolute generated-source directory.
    pub fn source_root(&self) -> PathBuf {
        self.dir.join(&self.config.generator.source_root)
    }

    /// Record keys of every input currently configured.
    pub fn live_keys(&self) -> HashSet<String> {
        self.units
            .iter()
            .flat_map(|u| u.references())
            .map(|r| r.to_string())
            .collect()
    }
}

/// Walks up from `start` looking for the nearest directory containing `regen.toml`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root directory from global CLI args.
///
/// If `--config` is specified, uses that path (file → parent dir, dir → itself).
/// Otherwise walks up from the current directory looking for `regen.toml`.
pub fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .filter(|d| !d.as_os_str().is_empty())
                .map(|d| d.to_path_buf())
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Loads configuration and builds the generation units.
pub fn load_project(global: &GlobalArgs) -> Result<Project, Box<dyn std::error::Error>> {
    let dir = resolve_project_root(global)?;
    let config = regen_config::load_config(&dir)?;
    let units = config.generation_units()?;
    debug!(project = %config.project.name, units = units.len(), "loaded configuration");
    Ok(Project { dir, config, units })
}
