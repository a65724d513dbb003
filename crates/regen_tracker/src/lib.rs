//! Incremental staleness tracking for code-generation inputs.
//!
//! A [`GenerationUnit`] lists the inputs that influence one code-generator
//! invocation. The [`StalenessTracker`] asks a host-provided
//! [`ChangeDetector`] whether any of those inputs changed since they were last
//! marked current, and marks them current once the host has regenerated its
//! outputs. The tracker owns no state of its own.

#![warn(missing_docs)]

pub mod detector;
pub mod error;
pub mod input;
pub mod tracker;
pub mod unit;

pub use detector::ChangeDetector;
pub use error::TrackerError;
pub use input::{ArtifactCoordinate, InputReference, ParseCoordinateError};
pub use tracker::StalenessTracker;
pub use unit::{GenerationUnit, GenerationUnitSource};
