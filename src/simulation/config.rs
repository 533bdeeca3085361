//! Roster configuration
//!
//! Parses RON (or JSON) roster files and turns them into the boss and heroes
//! the game starts with.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::combat::entity::{Boss, Hero, HeroClass, SuperPower};

/// Roster shipped with the binary
const BUILTIN_ROSTER: &str = include_str!("../../assets/config/roster.ron");

/// Largest health, damage or heal_points a roster may declare
pub const MAX_STAT: i64 = i32::MAX as i64;

/// Errors raised while loading a roster
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Ron {
        path: PathBuf,
        source: ron::error::SpannedError,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("invalid roster: {0}")]
    Invalid(String),
}

/// Boss stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossConfig {
    pub name: String,
    pub health: i64,
    pub damage: i64,
}

/// One roster slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub class: HeroClass,
    pub name: String,
    pub health: i64,
    pub damage: i64,
    /// Health restored to each ally per activation (Medic only)
    #[serde(default)]
    pub heal_points: Option<i64>,
}

/// Raid configuration loaded from RON or JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterConfig {
    pub boss: BossConfig,
    /// Heroes in turn order
    pub heroes: Vec<HeroConfig>,
    /// Random seed for deterministic replays; drawn from entropy if absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// End in a draw after this many rounds (default: unlimited)
    #[serde(default)]
    pub max_rounds: Option<u32>,
}

impl RosterConfig {
    /// The default raid bundled with the binary
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::parse(BUILTIN_ROSTER, Path::new("assets/config/roster.ron"))
    }

    /// Load a roster file. Files ending in `.json` are read as JSON,
    /// anything else as RON.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents, path)?;
        tracing::info!(
            "Loaded roster of {} heroes from {}",
            config.heroes.len(),
            path.display()
        );
        Ok(config)
    }

    /// Parse and validate `contents`; `path` picks the format and labels errors.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config: RosterConfig = if is_json {
            serde_json::from_str(contents).map_err(|source| ConfigError::Json {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            ron::from_str(contents).map_err(|source| ConfigError::Ron {
                path: path.to_path_buf(),
                source,
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.heroes.is_empty() {
            return invalid("roster must have at least one hero".to_string());
        }

        if self.boss.name.trim().is_empty() {
            return invalid("boss name must not be empty".to_string());
        }
        if !in_range(self.boss.health) || !in_range(self.boss.damage) {
            return invalid(format!(
                "boss {} must have health and damage between 0 and {}",
                self.boss.name, MAX_STAT
            ));
        }

        for (slot, hero) in self.heroes.iter().enumerate() {
            if hero.name.trim().is_empty() {
                return invalid(format!("hero in slot {} has an empty name", slot));
            }
            if !in_range(hero.health) || !in_range(hero.damage) {
                return invalid(format!(
                    "{} {} must have health and damage between 0 and {}",
                    hero.class, hero.name, MAX_STAT
                ));
            }
            match (hero.class, hero.heal_points) {
                (HeroClass::Medic, None) => {
                    return invalid(format!("Medic {} needs heal_points", hero.name));
                }
                (HeroClass::Medic, Some(points)) if !in_range(points) => {
                    return invalid(format!(
                        "Medic {} has heal_points {} outside 0..={}",
                        hero.name, points, MAX_STAT
                    ));
                }
                (HeroClass::Medic, Some(_)) | (_, None) => {}
                (class, Some(_)) => {
                    return invalid(format!(
                        "heal_points only applies to Medic, not {} {}",
                        class, hero.name
                    ));
                }
            }
        }

        if self.max_rounds == Some(0) {
            return invalid("max_rounds must be positive".to_string());
        }

        Ok(())
    }

    pub fn build_boss(&self) -> Boss {
        Boss::new(self.boss.name.clone(), self.boss.health, self.boss.damage)
    }

    pub fn build_heroes(&self) -> Vec<Hero> {
        self.heroes
            .iter()
            .map(|hero| {
                Hero::new(
                    hero.name.clone(),
                    hero.health,
                    hero.damage,
                    SuperPower::for_class(hero.class, hero.heal_points.unwrap_or(0)),
                )
            })
            .collect()
    }
}

fn in_range(value: i64) -> bool {
    (0..=MAX_STAT).contains(&value)
}

fn invalid(message: String) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(message))
}
