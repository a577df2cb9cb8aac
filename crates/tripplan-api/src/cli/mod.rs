//! CLI command definitions for the `tripplan` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod build;
pub mod purpose;
pub mod template;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build trip planning request payloads from form input.
#[derive(Parser)]
#[command(name = "tripplan", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text
    /// (`build` always prints JSON).
    #[arg(long, global = true)]
    pub json: bool,

    /// Only log errors to stderr (overrides -v and the configured filter).
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Sample request template (TOML, or JSON by extension).
    #[arg(long, global = true, env = "TRIPPLAN_TEMPLATE")]
    pub template: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a request payload from form values and print it as JSON.
    Build(build::BuildArgs),

    /// Show the purpose phrase inferred from an objective.
    Purpose {
        /// Objective tag (family_friendly, comfort, cheapest, ...).
        objective: Option<String>,
    },

    /// Show the effective sample request template.
    Template,

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
