//! regen CLI — incremental regeneration of WSDL-derived sources.
//!
//! Provides `regen check` to report whether generated sources are stale,
//! `regen build` to run the generator only when they are, `regen mark` to
//! record the current inputs without generating, `regen status` for a
//! per-input view, and `regen clean` to drop the change record.

#![warn(missing_docs)]

mod build;
mod check;
mod clean;
mod logging;
mod mark;
mod pipeline;
mod status;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// regen — regenerate sources from WSDL inputs only when they changed.
#[derive(Parser, Debug)]
#[command(name = "regen", version, about = "Incremental WSDL code generation")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a `regen.toml` file or the directory containing it.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report whether any generation unit is stale (exit 2 if so).
    Check(CheckArgs),
    /// Run the generator if any input changed, then record the inputs.
    Build(BuildArgs),
    /// Record all current inputs as up to date without generating.
    Mark,
    /// Show the change state of every input.
    Status,
    /// Delete the change record.
    Clean,
}

/// Arguments for the `regen check` subcommand.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Output format for the result.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `regen build` subcommand.
#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Run the generator even if nothing changed.
    #[arg(long)]
    pub force: bool,
}

/// Result output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    logging::init(cli.quiet, cli.verbose);

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Check(ref args) => check::run(args, &global),
        Command::Build(ref args) => build::run(args, &global),
        Command::Mark => mark::run(&global),
        Command::Status => status::run(&global),
        Command::Clean => clean::run(&global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
