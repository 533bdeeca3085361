//! Raid execution
//!
//! Builds a game from a roster, plays it to the end and produces a
//! [`MatchRecord`] that can be written out as JSON.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::combat::game::{Game, Outcome};
use crate::combat::log::CombatLogEntry;
use crate::combat::rng::{GameRng, RandomSource};
use crate::combat::CombatError;
use crate::report::{Reporter, RoundSnapshot};

use super::config::{ConfigError, RosterConfig};

/// Errors that stop a simulation run
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("failed to serialize match record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write match record to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result of a completed raid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub outcome: Outcome,
    /// Rounds played
    pub rounds: u32,
    /// Seed the game was played with
    pub seed: u64,
    /// State after the last round
    pub final_state: RoundSnapshot,
    /// Every combat log entry in order
    pub log: Vec<CombatLogEntry>,
}

impl MatchRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save the record as pretty-printed JSON
    pub fn save_to_file(&self, path: &Path) -> Result<(), SimulationError> {
        let contents = self.to_json()?;
        std::fs::write(path, contents).map_err(|source| SimulationError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Match record saved to {}", path.display());
        Ok(())
    }
}

/// Run a raid with the configuration's seed, or a fresh one if it has none.
pub fn run_simulation(
    config: &RosterConfig,
    reporter: &mut dyn Reporter,
) -> Result<MatchRecord, SimulationError> {
    config.validate()?;

    let seed = config.seed.unwrap_or_else(rand::random);
    match config.seed {
        Some(_) => tracing::info!("Using deterministic RNG with seed: {}", seed),
        None => tracing::info!("No seed provided, drew seed: {}", seed),
    }
    tracing::info!(
        "Boss {} ({} hp, {} dmg) vs {} heroes",
        config.boss.name,
        config.boss.health,
        config.boss.damage,
        config.heroes.len()
    );

    Ok(play(config, seed, GameRng::from_seed(seed), reporter)?)
}

/// Play `config` out with an explicit random source.
///
/// `seed` is only recorded; `rng` decides every draw.
pub fn play<R: RandomSource>(
    config: &RosterConfig,
    seed: u64,
    rng: R,
    reporter: &mut dyn Reporter,
) -> Result<MatchRecord, CombatError> {
    let mut game = Game::new(config.build_boss(), config.build_heroes(), rng)
        .with_max_rounds(config.max_rounds);
    let outcome = game.run(reporter)?;

    Ok(MatchRecord {
        outcome,
        rounds: game.round(),
        seed,
        final_state: game.snapshot(),
        log: game.log().entries.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::rng::ScriptedRng;
    use crate::report::NullReporter;

    #[test]
    fn test_record_serializes() {
        let config = RosterConfig::builtin().unwrap();
        let record = play(&config, 1, ScriptedRng::always_max(), &mut NullReporter).unwrap();

        let json = record.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["seed"], 1);
        assert_eq!(parsed["rounds"], record.rounds);
        assert_eq!(parsed["final_state"]["heroes"].as_array().unwrap().len(), 11);
    }

    #[test]
    fn test_invalid_config_is_rejected_before_playing() {
        let mut config = RosterConfig::builtin().unwrap();
        config.heroes.clear();
        let err = run_simulation(&config, &mut NullReporter).unwrap_err();
        assert!(matches!(err, SimulationError::Config(ConfigError::Invalid(_))));
    }
}
