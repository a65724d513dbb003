//! `regen status` — per-input change report.
//!
//! Unlike `check`, every input of every unit is queried and resolution
//! failures are reported per input on stderr instead of aborting.

use regen_tracker::ChangeDetector;

use crate::pipeline::load_project;
use crate::GlobalArgs;

/// Runs the `regen status` command.
///
/// Returns exit code 1 if any input could not be resolved.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let detector = project.open_detector();
    let mut failures = 0usize;

    if !global.quiet {
        println!(
            "{} ({} strategy, {} recorded input(s))",
            project.config.project.name,
            detector.strategy(),
            detector.manifest().inputs.len()
        );
    }

    for unit in &project.units {
        if !global.quiet {
            println!("  {}", unit.name);
            if unit.is_empty() {
                println!("    (no inputs)");
            }
        }
        for reference in unit.references() {
            match detector.has_changed(reference) {
                Ok(changed) => {
                    if !global.quiet {
                        let state = if changed { "changed" } else { "unchanged" };
                        println!("    {reference}: {state}");
                    }
                }
                Err(e) => {
                    failures += 1;
                    eprintln!("error: {reference}: {e}");
                }
            }
        }
    }

    Ok(if failures > 0 { 1 } else { 0 })
}
