//! Persisted change tracking for generator inputs.
//!
//! This crate provides the host side of staleness detection: a JSON change
//! manifest recording the content hash and file stamp of every input seen at
//! the last successful generation, a resolver that maps artifact coordinates
//! to files in a local repository, and [`ManifestDetector`], which implements
//! [`regen_tracker::ChangeDetector`] on top of both.

#![warn(missing_docs)]

pub mod detector;
pub mod error;
pub mod hasher;
pub mod manifest;
pub mod repository;

pub use detector::ManifestDetector;
pub use error::CacheError;
pub use hasher::{FileStamp, InputHasher};
pub use manifest::{ChangeManifest, InputRecord};
pub use regen_common::ChangeStrategy;
pub use repository::ArtifactRepository;
