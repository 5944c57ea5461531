use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ChatArgs, PlanCommands};

/// Command-line trip planner
///
/// Wayfarer keeps a collection of trip plans, each with a destination, dates,
/// party size, budget and a status that moves from not started through in
/// progress to completed. One-shot commands work on a freshly seeded
/// collection; `shell` keeps the collection alive across commands.
#[derive(Parser)]
#[command(version, about, name = "wayfarer")]
pub struct Args {
    /// JSON file with the initial plans. Defaults to
    /// $XDG_CONFIG_HOME/wayfarer/seed.json when present, otherwise the
    /// built-in sample plans
    #[arg(long, global = true, conflicts_with = "empty")]
    pub seed_file: Option<PathBuf>,

    /// Start with no plans at all
    #[arg(long, global = true)]
    pub empty: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Simulated assistant reply delay in milliseconds
    #[arg(long, global = true, default_value_t = 800)]
    pub latency_ms: u64,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wayfarer CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Show plan counts by status and the trips still ahead
    #[command(alias = "d")]
    Dashboard,
    /// Ask the travel assistant a question
    Chat(ChatArgs),
    /// Start an interactive session that keeps plans between commands
    Shell,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_seed_file_conflicts_with_empty() {
        let result = Args::try_parse_from(["wayfarer", "--empty", "--seed-file", "x.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wayfarer"]).unwrap();
        assert_eq!(args.latency_ms, 800);
        assert!(!args.json);
        assert!(args.command.is_none());
    }
}
