//! The staleness predicate and the mark-current command.

use tracing::{debug, info};

use crate::detector::ChangeDetector;
use crate::error::TrackerError;
use crate::input::InputReference;
use crate::unit::GenerationUnit;

/// Decides whether generation units need regenerating.
///
/// Holds a [`ChangeDetector`], either owned or borrowed as `&mut D`, and
/// nothing else. Queries never touch the change record; only
/// [`mark_current`](Self::mark_current) and
/// [`mark_all_current`](Self::mark_all_current) update it.
pub struct StalenessTracker<D> {
    detector: D,
}

impl<D: ChangeDetector> StalenessTracker<D> {
    /// Creates a tracker over the given detector.
    pub fn new(detector: D) -> Self {
        Self { detector }
    }

    /// Returns `true` if any non-empty reference of `unit` has changed.
    ///
    /// References are queried in evaluation order and the walk stops at the
    /// first change. Detector errors propagate unchanged.
    pub fn is_stale(&self, unit: &GenerationUnit) -> Result<bool, TrackerError> {
        Ok(self.stale_reference(unit)?.is_some())
    }

    /// Returns the first reference of `unit` that has changed, if any.
    pub fn stale_reference<'u>(
        &self,
        unit: &'u GenerationUnit,
    ) -> Result<Option<&'u InputReference>, TrackerError> {
        for reference in unit.references() {
            if self.detector.has_changed(reference)? {
                debug!(unit = %unit.name, input = %reference, "input changed");
                return Ok(Some(reference));
            }
            debug!(unit = %unit.name, input = %reference, "input unchanged");
        }
        Ok(None)
    }

    /// Evaluates `units` in order and returns the first stale one together
    /// with the reference that made it stale.
    ///
    /// Units after the first stale unit are not queried.
    pub fn first_stale<'u>(
        &self,
        units: &'u [GenerationUnit],
    ) -> Result<Option<(&'u GenerationUnit, &'u InputReference)>, TrackerError> {
        for unit in units {
            if let Some(reference) = self.stale_reference(unit)? {
                info!(unit = %unit.name, input = %reference, "generation unit is stale");
                return Ok(Some((unit, reference)));
            }
        }
        Ok(None)
    }

    /// Marks every non-empty reference of `unit` as current.
    ///
    /// Call only after outputs for `unit` were regenerated successfully.
    /// Stops at the first detector failure; references already marked stay
    /// marked.
    pub fn mark_current(&mut self, unit: &GenerationUnit) -> Result<(), TrackerError> {
        let mut marked = 0usize;
        for reference in unit.references() {
            self.detector.mark_seen(reference)?;
            marked += 1;
        }
        info!(unit = %unit.name, inputs = marked, "marked generation unit current");
        Ok(())
    }

    /// Marks every unit in `units` as current.
    pub fn mark_all_current(&mut self, units: &[GenerationUnit]) -> Result<(), TrackerError> {
        units.iter().try_for_each(|unit| self.mark_current(unit))
    }

    /// Returns a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Consumes the tracker and returns the detector.
    pub fn into_inner(self) -> D {
        self.detector
    }
}
