//! Parsing and validation of `regen.toml` project configuration files.
//!
//! This crate reads the project configuration and produces a strongly-typed
//! [`ProjectConfig`], which in turn yields the ordered generation units the
//! staleness tracker evaluates.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;
pub mod units;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use types::*;
pub use units::DEFAULT_UNIT_NAME;
