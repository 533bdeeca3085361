//! Game loop
//!
//! Repeats rounds until the boss or the whole roster has fallen, handing a
//! snapshot to the reporter after each one.

use serde::{Deserialize, Serialize};

use super::entity::{Boss, Hero};
use super::log::{CombatLog, CombatLogEventType};
use super::rng::{GameRng, RandomSource};
use super::round;
use super::CombatError;
use crate::report::{Reporter, RoundSnapshot};

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HeroesWon,
    BossWon,
    /// The round cap ran out first
    Draw,
}

impl Outcome {
    pub fn announcement(&self) -> &'static str {
        match self {
            Outcome::HeroesWon => "Heroes won!!!",
            Outcome::BossWon => "Boss won!!!",
            Outcome::Draw => "Draw: round limit reached",
        }
    }
}

/// Check whether the game is over.
///
/// The boss falling takes precedence over the roster falling.
pub fn is_game_over(boss: &Boss, heroes: &[Hero]) -> Option<Outcome> {
    if !boss.is_alive() {
        return Some(Outcome::HeroesWon);
    }
    if heroes.iter().all(|h| !h.is_alive()) {
        return Some(Outcome::BossWon);
    }
    None
}

/// One boss, one roster, and the state needed to play them out
pub struct Game<R = GameRng> {
    boss: Boss,
    heroes: Vec<Hero>,
    rng: R,
    log: CombatLog,
    round: u32,
    max_rounds: Option<u32>,
}

impl<R: RandomSource> Game<R> {
    pub fn new(boss: Boss, heroes: Vec<Hero>, rng: R) -> Self {
        Self {
            boss,
            heroes,
            rng,
            log: CombatLog::default(),
            round: 0,
            max_rounds: None,
        }
    }

    /// End in a draw after `max_rounds` rounds
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn boss(&self) -> &Boss {
        &self.boss
    }

    pub fn heroes(&self) -> &[Hero] {
        &self.heroes
    }

    /// Rounds played so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::capture(self.round, &self.boss, &self.heroes)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        is_game_over(&self.boss, &self.heroes)
    }

    /// Play the next round.
    pub fn play_round(&mut self) -> Result<(), CombatError> {
        self.round += 1;
        round::play_round(
            self.round,
            &mut self.boss,
            &mut self.heroes,
            &mut self.rng,
            &mut self.log,
        )
    }

    /// Play until the game is over and return how it ended.
    pub fn run(&mut self, reporter: &mut dyn Reporter) -> Result<Outcome, CombatError> {
        self.log.log(
            CombatLogEventType::MatchEvent,
            format!(
                "Boss {} faces {} heroes",
                self.boss.stats.name(),
                self.heroes.len()
            ),
        );
        reporter.report_round(&self.snapshot(), self.log.for_round(0));

        let outcome = loop {
            if let Some(outcome) = self.outcome() {
                break outcome;
            }
            if self.max_rounds.is_some_and(|max| self.round >= max) {
                break Outcome::Draw;
            }

            self.play_round()?;
            reporter.report_round(&self.snapshot(), self.log.for_round(self.round));
        };

        self.log.log(
            CombatLogEventType::MatchEvent,
            outcome.announcement().to_string(),
        );
        tracing::info!(?outcome, rounds = self.round, "game over");
        reporter.report_outcome(outcome, self.round);
        Ok(outcome)
    }
}
