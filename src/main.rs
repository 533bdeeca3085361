//! BossRaid - Turn-Based Boss Raid Simulator
//!
//! Plays a raid from the command line and prints every round.

use std::process::ExitCode;

use bossraid::cli;
use bossraid::report::ConsoleReporter;
use bossraid::simulation::{run_simulation, RosterConfig, SimulationError};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();
    let args = cli::parse_args();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so round statistics on stdout stay clean. `RUST_LOG`
/// overrides the default `info` level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::Args) -> Result<(), SimulationError> {
    let mut config = match &args.roster {
        Some(path) => RosterConfig::load_from_file(path)?,
        None => RosterConfig::builtin()?,
    };
    args.apply_overrides(&mut config);

    let mut reporter = ConsoleReporter::stdout().quiet(args.quiet);
    let record = run_simulation(&config, &mut reporter)?;

    if let Some(path) = &args.output {
        record.save_to_file(path)?;
        println!("Match record saved to: {}", path.display());
    }
    Ok(())
}
