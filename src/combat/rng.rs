//! Random sources
//!
//! Every draw in the simulation goes through [`RandomSource`] so a run can be
//! reproduced from a seed ([`GameRng`]) or scripted outright in tests
//! ([`ScriptedRng`]).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::ops::RangeInclusive;

/// Source of uniform integer draws and uniform picks.
pub trait RandomSource {
    /// Uniform integer in the inclusive `range`
    fn draw_int(&mut self, range: RangeInclusive<i64>) -> i64;

    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Uniform pick from `items`, or `None` when empty
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.choose_index(items.len());
        items.get(index)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn draw_int(&mut self, range: RangeInclusive<i64>) -> i64 {
        (**self).draw_int(range)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// Seedable RNG used for real runs
pub struct GameRng {
    rng: StdRng,
    /// The seed used to initialize this RNG
    pub seed: u64,
}

impl GameRng {
    /// Create a new GameRng with a specific seed for deterministic behavior
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }
}

impl RandomSource for GameRng {
    fn draw_int(&mut self, range: RangeInclusive<i64>) -> i64 {
        self.rng.gen_range(range)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// What a [`ScriptedRng`] answers once its queue runs dry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// Lowest value of the range, first index
    #[default]
    Min,
    /// Highest value of the range, last index
    Max,
}

/// Replays queued values in order.
///
/// Queued values outside the requested range are clamped into it, and an
/// empty queue falls back to the range minimum or maximum.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    ints: VecDeque<i64>,
    picks: VecDeque<usize>,
    fallback: Fallback,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every draw answers the minimum
    pub fn always_min() -> Self {
        Self::default()
    }

    /// Every draw answers the maximum
    pub fn always_max() -> Self {
        Self {
            fallback: Fallback::Max,
            ..Self::default()
        }
    }

    pub fn with_ints(mut self, ints: impl IntoIterator<Item = i64>) -> Self {
        self.ints.extend(ints);
        self
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queued values not yet consumed: `(ints, picks)`
    pub fn remaining(&self) -> (usize, usize) {
        (self.ints.len(), self.picks.len())
    }
}

impl RandomSource for ScriptedRng {
    fn draw_int(&mut self, range: RangeInclusive<i64>) -> i64 {
        let (low, high) = (*range.start(), *range.end());
        match self.ints.pop_front() {
            Some(value) => value.clamp(low, high),
            None => match self.fallback {
                Fallback::Min => low,
                Fallback::Max => high,
            },
        }
    }

    fn choose_index(&mut self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        match self.picks.pop_front() {
            Some(index) => index.min(last),
            None => match self.fallback {
                Fallback::Min => 0,
                Fallback::Max => last,
            },
        }
    }
}
