//! `regen build` — regenerate sources when inputs changed.
//!
//! The full pipeline:
//!
//! 1. Find project root and load `regen.toml`
//! 2. Evaluate units in order, stopping at the first stale one
//! 3. Run the generator once for the whole project
//! 4. On success, mark every unit current and save the change record
//! 5. Refresh the generated-source directory

use std::path::Path;
use std::process::Command;

use regen_config::ConfigError;
use regen_tracker::StalenessTracker;
use tracing::{debug, info};

use crate::pipeline::{load_project, Project};
use crate::{BuildArgs, GlobalArgs};

/// Runs the `regen build` command.
///
/// Returns exit code 0 if sources are up to date or were regenerated, and 1
/// if the generator failed. Nothing is recorded after a failed generation.
pub fn run(args: &BuildArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project = load_project(global)?;
    let mut tracker = StalenessTracker::new(project.open_detector());

    let needs_build = if args.force {
        info!("forced rebuild");
        true
    } else {
        match tracker.first_stale(&project.units)? {
            Some((unit, reference)) => {
                if !global.quiet {
                    eprintln!("      Stale {} ({reference})", unit.name);
                }
                true
            }
            None => false,
        }
    };

    if !needs_build {
        if !global.quiet {
            eprintln!("   Up to date {}", project.config.project.name);
        }
        return Ok(0);
    }

    if !run_generator(&project, global)? {
        return Ok(1);
    }

    tracker.mark_all_current(&project.units)?;
    let mut detector = tracker.into_inner();
    detector.prune(&project.live_keys());
    detector.save()?;

    let source_root = project.source_root();
    let generated = refresh_source_root(&source_root)?;
    if !global.quiet {
        eprintln!(
            "   Refreshed {} ({generated} file(s))",
            source_root.display()
        );
    }
    Ok(0)
}

/// Runs the configured generator in the project directory.
///
/// Returns `false` if the generator exited unsuccessfully.
fn run_generator(
    project: &Project,
    global: &GlobalArgs,
) -> Result<bool, Box<dyn std::error::Error>> {
    let generator = &project.config.generator;
    let command = generator
        .command
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingField("generator.command".to_string()))?;

    let source_root = project.source_root();
    let wsdl = project
        .config
        .first_wsdl()
        .map(|w| project.dir.join(w).display().to_string())
        .unwrap_or_default();
    let vars = [
        ("{source_root}", source_root.display().to_string()),
        ("{wsdl}", wsdl),
        ("{project}", project.config.project.name.clone()),
    ];
    let args = expand_args(&generator.args, &vars);

    if global.verbose {
        eprintln!("     Running {command} {}", args.join(" "));
    } else if !global.quiet {
        eprintln!("  Generating {}", project.config.project.name);
    }
    debug!(%command, ?args, "spawning generator");

    let status = Command::new(command)
        .args(&args)
        .current_dir(&project.dir)
        .status()
        .map_err(|e| format!("failed to run generator '{command}': {e}"))?;

    if status.success() {
        Ok(true)
    } else {
        eprintln!("error: generator '{command}' failed ({status})");
        Ok(false)
    }
}

/// Substitutes `{name}` placeholders in every argument.
fn expand_args(args: &[String], vars: &[(&str, String)]) -> Vec<String> {
    args.iter()
        .map(|arg| {
            vars.iter()
                .fold(arg.clone(), |acc, (key, value)| acc.replace(*key, value))
        })
        .collect()
}

/// Makes sure the generated-source directory exists and counts its files.
fn refresh_source_root(dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(dir)?;
    count_files(dir)
}

/// Recursively counts regular files under `dir`.
fn count_files(dir: &Path) -> Result<usize, Box<dyn std::error::Error>> {
    let mut count = 0;
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            count += count_files(&path)?;
        } else {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_known_placeholders() {
        let args = vec![
            "-d".to_string(),
            "{source_root}".to_string(),
            "--name={project}".to_string(),
            "{wsdl}".to_string(),
        ];
        let vars = [
            ("{source_root}", "/p/gen".to_string()),
            ("{wsdl}", "/p/a.wsdl".to_string()),
            ("{project}", "billing".to_string()),
        ];
        assert_eq!(
            expand_args(&args, &vars),
            vec!["-d", "/p/gen", "--name=billing", "/p/a.wsdl"]
        );
    }

    #[test]
    fn unknown_placeholders_left_alone() {
        let args = vec!["{other}".to_string()];
        assert_eq!(expand_args(&args, &[]), vec!["{other}"]);
    }

    #[test]
    fn refresh_creates_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("gen");
        assert_eq!(refresh_source_root(&root).unwrap(), 0);

        let pkg = root.join("com").join("example");
        std::fs::create_dir_all(&pkg).unwrap();
        std::fs::write(pkg.join("Billing.java"), "class Billing {}").unwrap();
        std::fs::write(pkg.join("ObjectFactory.java"), "class ObjectFactory {}").unwrap();
        assert_eq!(refresh_source_root(&root).unwrap(), 2);
    }
}
