//! Error types for staleness checks.

/// Errors surfaced by [`StalenessTracker`](crate::StalenessTracker) operations.
///
/// The tracker never recovers from these itself. A unit is fresh, stale, or
/// the check failed with one of these errors.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The change detector could not evaluate a non-empty input reference,
    /// e.g. the path does not exist or an artifact could not be resolved.
    #[error("cannot resolve input '{reference}': {reason}")]
    InputResolution {
        /// Display form of the offending reference.
        reference: String,
        /// Description of the resolution failure.
        reason: String,
    },

    /// The change record could not be updated after a rebuild.
    #[error("failed to update change record: {reason}")]
    Record {
        /// Description of the failure.
        reason: String,
    },
}

impl TrackerError {
    /// Creates a [`TrackerError::InputResolution`] for the given reference.
    pub fn unresolved(reference: impl ToString, reason: impl Into<String>) -> Self {
        Self::InputResolution {
            reference: reference.to_string(),
            reason: reason.into(),
        }
    }
}
