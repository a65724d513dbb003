//! The change-detection collaborator consumed by the tracker.

use crate::error::TrackerError;
use crate::input::InputReference;

/// Answers whether an input changed since it was last marked seen.
///
/// Implementations own the persisted change record. Queries take `&self`
/// and must not mutate the record; updates take `&mut self`, so concurrent
/// updates have to be serialized by whoever owns the detector.
pub trait ChangeDetector {
    /// Returns `true` if `reference` changed since it was last marked seen,
    /// or was never seen at all.
    fn has_changed(&self, reference: &InputReference) -> Result<bool, TrackerError>;

    /// Records the current state of `reference` as seen.
    fn mark_seen(&mut self, reference: &InputReference) -> Result<(), TrackerError>;
}

impl<D: ChangeDetector + ?Sized> ChangeDetector for &mut D {
    fn has_changed(&self, reference: &InputReference) -> Result<bool, TrackerError> {
        (**self).has_changed(reference)
    }

    fn mark_seen(&mut self, reference: &InputReference) -> Result<(), TrackerError> {
        (**self).mark_seen(reference)
    }
}

impl<D: ChangeDetector + ?Sized> ChangeDetector for Box<D> {
    fn has_changed(&self, reference: &InputReference) -> Result<bool, TrackerError> {
        (**self).has_changed(reference)
    }

    fn mark_seen(&mut self, reference: &InputReference) -> Result<(), TrackerError> {
        (**self).mark_seen(reference)
    }
}
