//! Combat system
//!
//! Implements the raid mechanics:
//! - Boss and hero stats with clamped health
//! - Boss defence choice and attack, including Berserk blocks
//! - Per-class special powers
//! - Round resolution and the game loop
//! - Combat logging

pub mod abilities;
pub mod boss;
pub mod entity;
pub mod game;
pub mod log;
pub mod rng;
pub mod round;

pub use entity::{Ability, Boss, Hero, HeroClass, Stats, SuperPower};
pub use game::{is_game_over, Game, Outcome};
pub use rng::{GameRng, RandomSource, ScriptedRng};

/// Errors raised while resolving a round
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// A uniform pick was asked to choose from nothing.
    #[error("no candidate to choose from for {0}")]
    EmptySelection(&'static str),

    /// A power was fired for a roster slot that does not exist.
    #[error("no hero at roster index {0}")]
    UnknownHero(usize),
}
