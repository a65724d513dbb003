//! `regen check` — report whether generated sources are stale.
//!
//! Units are evaluated in order (`[defaults]` first, then each option) and
//! the check stops at the first changed input.

use regen_tracker::StalenessTracker;

use crate::pipeline::load_project;
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Exit code signalling that regeneration is needed.
pub const EXIT_STALE: i32 = 2;

/// Runs the `regen check` command.
///
/// Returns exit code 0 if everything is up to date and [`EXIT_STALE`] if
/// any unit needs regenerating.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let detector = project.open_detector();
    let tracker = StalenessTracker::new(detector);

    let stale = tracker.first_stale(&project.units)?;

    match args.format {
        ReportFormat::Text => {
            if !global.quiet {
                match stale {
                    Some((unit, reference)) => println!("stale: {} ({reference})", unit.name),
                    None => println!("up to date"),
                }
            }
        }
        ReportFormat::Json => {
            let report = serde_json::json!({
                "project": project.config.project.name,
                "stale": stale.is_some(),
                "unit": stale.map(|(u, _)| u.name.clone()),
                "reference": stale.map(|(_, r)| r.to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(if stale.is_some() { EXIT_STALE } else { 0 })
}
