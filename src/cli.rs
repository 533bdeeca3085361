//! Command-line interface for the raid simulator

use clap::Parser;
use std::path::PathBuf;

use crate::simulation::RosterConfig;

/// Turn-based boss raid simulator
#[derive(Parser, Debug)]
#[command(name = "bossraid")]
#[command(about = "Turn-based boss raid simulator")]
#[command(version)]
pub struct Args {
    /// Roster file (RON, or JSON with a .json extension). Uses the built-in
    /// raid when omitted.
    #[arg(long, value_name = "ROSTER_FILE")]
    pub roster: Option<PathBuf>,

    /// Random seed for a reproducible raid (overrides the roster file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Declare a draw after this many rounds (overrides the roster file)
    #[arg(long, value_name = "ROUNDS")]
    pub max_rounds: Option<u32>,

    /// Write the match record as JSON to this path
    #[arg(long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Only print the outcome, not every round
    #[arg(long, short)]
    pub quiet: bool,
}

impl Args {
    /// Apply command-line overrides on top of a loaded roster
    pub fn apply_overrides(&self, config: &mut RosterConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = Some(max_rounds);
        }
    }
}

pub fn parse_args() -> Args {
    Args::parse()
}
