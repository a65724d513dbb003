//! `regen mark` — record every configured input as current.

use regen_tracker::StalenessTracker;

use crate::pipeline::load_project;
use crate::GlobalArgs;

/// Runs the `regen mark` command.
///
/// Useful after generating sources by other means. Records for inputs that
/// are no longer configured are dropped.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let mut tracker = StalenessTracker::new(project.open_detector());
    tracker.mark_all_current(&project.units)?;

    let mut detector = tracker.into_inner();
    detector.prune(&project.live_keys());
    detector.save()?;

    if !global.quiet {
        eprintln!(
            "     Marked {} unit(s) current ({} input(s))",
            project.units.len(),
            detector.manifest().inputs.len()
        );
    }
    Ok(0)
}
