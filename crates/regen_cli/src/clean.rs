//! `regen clean` — delete the change record.

use crate::pipeline::load_project;
use crate::GlobalArgs;

/// Runs the `regen clean` command.
///
/// The next `check` or `build` treats every input as changed.
pub fn run(global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let cache_dir = project.cache_dir();

    if cache_dir.is_dir() {
        std::fs::remove_dir_all(&cache_dir)?;
        if !global.quiet {
            eprintln!("    Removed {}", cache_dir.display());
        }
    } else if !global.quiet {
        eprintln!("    Nothing to clean");
    }
    Ok(0)
}
