//! Shared foundational types used across the regen workspace.
//!
//! Provides the content hash used to fingerprint generator inputs and the
//! change-detection strategy selector shared by configuration and cache.

#![warn(missing_docs)]

pub mod hash;
pub mod strategy;

pub use hash::ContentHash;
pub use strategy::ChangeStrategy;
