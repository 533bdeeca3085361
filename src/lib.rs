//! BossRaid - Turn-Based Boss Raid Simulator
//!
//! One boss against a fixed roster of heroes, each with its own special
//! power. Rounds repeat until the boss or the whole roster has fallen.
//!
//! This library exposes the core game modules for testing and reuse.

pub mod cli;
pub mod combat;
pub mod report;
pub mod simulation;

// Re-export commonly used types
pub use combat::log::{CombatLog, CombatLogEventType};
pub use combat::{Ability, Boss, CombatError, Game, Hero, HeroClass, Outcome};
pub use simulation::{MatchRecord, RosterConfig};
