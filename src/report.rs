//! Round reporting
//!
//! The engine hands a read-only [`RoundSnapshot`] to a [`Reporter`] after
//! every round. Reporters cannot reach back into the simulation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};

use crate::combat::entity::{Ability, Boss, Hero, HeroClass};
use crate::combat::game::Outcome;
use crate::combat::log::CombatLogEntry;

/// Boss state at the end of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSnapshot {
    pub name: String,
    pub health: i64,
    pub damage: i64,
    pub defence: Option<Ability>,
}

/// Hero state at the end of a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroSnapshot {
    pub name: String,
    pub class: HeroClass,
    pub health: i64,
    pub damage: i64,
}

/// Everything a reporter gets to see after a round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// 0 for the state before the first round
    pub round: u32,
    pub boss: BossSnapshot,
    pub heroes: Vec<HeroSnapshot>,
}

impl RoundSnapshot {
    pub fn capture(round: u32, boss: &Boss, heroes: &[Hero]) -> Self {
        Self {
            round,
            boss: BossSnapshot {
                name: boss.stats.name().to_string(),
                health: boss.stats.health(),
                damage: boss.stats.damage(),
                defence: boss.defence(),
            },
            heroes: heroes
                .iter()
                .map(|hero| HeroSnapshot {
                    name: hero.stats.name().to_string(),
                    class: hero.class(),
                    health: hero.stats.health(),
                    damage: hero.stats.damage(),
                })
                .collect(),
        }
    }

    pub fn living_heroes(&self) -> usize {
        self.heroes.iter().filter(|h| h.health > 0).count()
    }
}

impl fmt::Display for BossSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BOSS {} health: {} damage: {} defence: ",
            self.name, self.health, self.damage
        )?;
        match self.defence {
            Some(defence) => write!(f, "{}", defence),
            None => f.write_str("None"),
        }
    }
}

impl fmt::Display for HeroSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} health: {} damage: {}",
            self.name, self.health, self.damage
        )
    }
}

/// Receives snapshots as the game progresses
pub trait Reporter {
    /// Called with the initial state (round 0) and after every round.
    /// `entries` are the combat log entries recorded during that round.
    fn report_round(&mut self, snapshot: &RoundSnapshot, entries: &[CombatLogEntry]);

    /// Called once when the game ends.
    fn report_outcome(&mut self, _outcome: Outcome, _rounds: u32) {}
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report_round(&mut self, _snapshot: &RoundSnapshot, _entries: &[CombatLogEntry]) {}
}

/// Keeps every snapshot in memory
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    pub snapshots: Vec<RoundSnapshot>,
    pub outcome: Option<(Outcome, u32)>,
}

impl Reporter for RecordingReporter {
    fn report_round(&mut self, snapshot: &RoundSnapshot, _entries: &[CombatLogEntry]) {
        self.snapshots.push(snapshot.clone());
    }

    fn report_outcome(&mut self, outcome: Outcome, rounds: u32) {
        self.outcome = Some((outcome, rounds));
    }
}

/// Prints round statistics as plain text
pub struct ConsoleReporter<W: Write> {
    out: W,
    /// Only print the final announcement
    pub quiet: bool,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, quiet: false }
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_round(&mut self, snapshot: &RoundSnapshot, entries: &[CombatLogEntry]) -> io::Result<()> {
        for entry in entries.iter().filter(|e| e.event_type.is_narrated()) {
            writeln!(self.out, "{}", entry.message)?;
        }
        writeln!(self.out, "ROUND {} ----------------", snapshot.round)?;
        writeln!(self.out, "{}", snapshot.boss)?;
        for hero in &snapshot.heroes {
            writeln!(self.out, "{}", hero)?;
        }
        Ok(())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report_round(&mut self, snapshot: &RoundSnapshot, entries: &[CombatLogEntry]) {
        if self.quiet {
            return;
        }
        if let Err(e) = self.write_round(snapshot, entries) {
            tracing::warn!("Failed to print round {}: {}", snapshot.round, e);
        }
    }

    fn report_outcome(&mut self, outcome: Outcome, rounds: u32) {
        let result = writeln!(self.out, "{}", outcome.announcement())
            .and_then(|_| writeln!(self.out, "Rounds played: {}", rounds))
            .and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!("Failed to print outcome: {}", e);
        }
    }
}
