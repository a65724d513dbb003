//! Error types for configuration loading and validation.

use regen_tracker::ParseCoordinateError;

/// Errors that can occur when loading or validating a `regen.toml`.
///
/// These are raised while building generation units, before the tracker is
/// ever invoked.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the configuration.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// An `artifact` value is not a valid coordinate.
    #[error(transparent)]
    InvalidArtifact(#[from] ParseCoordinateError),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
