//! Entity model
//!
//! Boss and hero attribute containers. Health never goes below zero on any
//! write; damage is stored as-is so boosts can stack. Arithmetic on both
//! saturates at the `i64` bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Special-power category.
///
/// Identifies a hero's kind and is also what the boss picks as its defence
/// each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    CriticalDamage,
    Boost,
    BlockDamageAndRevert,
    Heal,
}

impl Ability {
    pub fn name(&self) -> &'static str {
        match self {
            Ability::CriticalDamage => "CriticalDamage",
            Ability::Boost => "Boost",
            Ability::BlockDamageAndRevert => "BlockDamageAndRevert",
            Ability::Heal => "Heal",
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Name, health and damage shared by the boss and every hero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    name: String,
    health: i64,
    damage: i64,
}

impl Stats {
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Self {
        let mut stats = Self {
            name: name.into(),
            health: 0,
            damage,
        };
        stats.set_health(health);
        stats
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> i64 {
        self.health
    }

    pub fn damage(&self) -> i64 {
        self.damage
    }

    /// Store `value`, clamped at zero.
    pub fn set_health(&mut self, value: i64) {
        self.health = value.max(0);
    }

    pub fn set_damage(&mut self, value: i64) {
        self.damage = value;
    }

    /// Reduce health by `amount`. A negative amount heals.
    pub fn take_damage(&mut self, amount: i64) {
        self.set_health(self.health.saturating_sub(amount));
    }

    pub fn heal(&mut self, amount: i64) {
        self.set_health(self.health.saturating_add(amount));
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} health: {} damage: {}",
            self.name, self.health, self.damage
        )
    }
}

/// The single opponent of the raid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boss {
    pub stats: Stats,
    defence: Option<Ability>,
    /// Set by Thor; consumed the next time the boss would attack.
    pub stunned: bool,
}

impl Boss {
    pub fn new(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self {
            stats: Stats::new(name, health, damage),
            defence: None,
            stunned: false,
        }
    }

    /// Ability guarded against this round (`None` before the first round)
    pub fn defence(&self) -> Option<Ability> {
        self.defence
    }

    /// Force the defence for the current round.
    ///
    /// Normally set by [`Boss::choose_defence`]; exposed for scripted
    /// scenarios that need a specific defence.
    pub fn set_defence(&mut self, defence: Option<Ability>) {
        self.defence = defence;
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }
}

impl fmt::Display for Boss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.defence {
            Some(defence) => write!(f, "BOSS {} defence: {}", self.stats, defence),
            None => write!(f, "BOSS {} defence: None", self.stats),
        }
    }
}

/// Available hero classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeroClass {
    Warrior,
    Magic,
    Medic,
    Berserk,
    Witcher,
    Hacker,
    Golem,
    Thor,
    TrickyBastard,
}

impl HeroClass {
    /// Get all available hero classes
    pub fn all() -> &'static [HeroClass] {
        &[
            HeroClass::Warrior,
            HeroClass::Magic,
            HeroClass::Medic,
            HeroClass::Berserk,
            HeroClass::Witcher,
            HeroClass::Hacker,
            HeroClass::Golem,
            HeroClass::Thor,
            HeroClass::TrickyBastard,
        ]
    }

    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            HeroClass::Warrior => "Warrior",
            HeroClass::Magic => "Magic",
            HeroClass::Medic => "Medic",
            HeroClass::Berserk => "Berserk",
            HeroClass::Witcher => "Witcher",
            HeroClass::Hacker => "Hacker",
            HeroClass::Golem => "Golem",
            HeroClass::Thor => "Thor",
            HeroClass::TrickyBastard => "TrickyBastard",
        }
    }

    /// The ability every hero of this class carries
    pub fn ability(&self) -> Ability {
        match self {
            HeroClass::Warrior | HeroClass::Thor | HeroClass::TrickyBastard => {
                Ability::CriticalDamage
            }
            HeroClass::Magic | HeroClass::Golem => Ability::Boost,
            HeroClass::Berserk => Ability::BlockDamageAndRevert,
            HeroClass::Medic | HeroClass::Witcher | HeroClass::Hacker => Ability::Heal,
        }
    }
}

impl fmt::Display for HeroClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-class special power along with the state it carries between rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuperPower {
    Warrior,
    Magic,
    Medic { heal_points: i64 },
    /// `blocked_damage` is the last block drawn by the boss attack step.
    Berserk { blocked_damage: i64 },
    Witcher { has_revived: bool },
    /// Starts with `steal_round = true` and flips on every activation.
    Hacker { steal_round: bool },
    Golem,
    Thor,
    /// Cosmetic only.
    TrickyBastard { fake_dead: bool },
}

impl SuperPower {
    /// Fresh power for `class`. `heal_points` is only read for Medic.
    pub fn for_class(class: HeroClass, heal_points: i64) -> Self {
        match class {
            HeroClass::Warrior => SuperPower::Warrior,
            HeroClass::Magic => SuperPower::Magic,
            HeroClass::Medic => SuperPower::Medic { heal_points },
            HeroClass::Berserk => SuperPower::Berserk { blocked_damage: 0 },
            HeroClass::Witcher => SuperPower::Witcher { has_revived: false },
            HeroClass::Hacker => SuperPower::Hacker { steal_round: true },
            HeroClass::Golem => SuperPower::Golem,
            HeroClass::Thor => SuperPower::Thor,
            HeroClass::TrickyBastard => SuperPower::TrickyBastard { fake_dead: false },
        }
    }

    pub fn class(&self) -> HeroClass {
        match self {
            SuperPower::Warrior => HeroClass::Warrior,
            SuperPower::Magic => HeroClass::Magic,
            SuperPower::Medic { .. } => HeroClass::Medic,
            SuperPower::Berserk { .. } => HeroClass::Berserk,
            SuperPower::Witcher { .. } => HeroClass::Witcher,
            SuperPower::Hacker { .. } => HeroClass::Hacker,
            SuperPower::Golem => HeroClass::Golem,
            SuperPower::Thor => HeroClass::Thor,
            SuperPower::TrickyBastard { .. } => HeroClass::TrickyBastard,
        }
    }
}

/// A member of the raid roster.
///
/// The class (and therefore the ability) is fixed at construction; only the
/// state inside the power changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub stats: Stats,
    power: SuperPower,
}

impl Hero {
    pub fn new(name: impl Into<String>, health: i64, damage: i64, power: SuperPower) -> Self {
        Self {
            stats: Stats::new(name, health, damage),
            power,
        }
    }

    pub fn warrior(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::Warrior)
    }

    pub fn magic(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::Magic)
    }

    pub fn medic(name: impl Into<String>, health: i64, damage: i64, heal_points: i64) -> Self {
        Self::new(name, health, damage, SuperPower::Medic { heal_points })
    }

    pub fn berserk(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::for_class(HeroClass::Berserk, 0))
    }

    pub fn witcher(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::for_class(HeroClass::Witcher, 0))
    }

    pub fn hacker(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::for_class(HeroClass::Hacker, 0))
    }

    pub fn golem(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::Golem)
    }

    pub fn thor(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(name, health, damage, SuperPower::Thor)
    }

    pub fn tricky_bastard(name: impl Into<String>, health: i64, damage: i64) -> Self {
        Self::new(
            name,
            health,
            damage,
            SuperPower::for_class(HeroClass::TrickyBastard, 0),
        )
    }

    pub fn class(&self) -> HeroClass {
        self.power.class()
    }

    pub fn ability(&self) -> Ability {
        self.class().ability()
    }

    pub fn power(&self) -> SuperPower {
        self.power
    }

    pub(crate) fn power_mut(&mut self) -> &mut SuperPower {
        &mut self.power
    }

    pub fn is_alive(&self) -> bool {
        self.stats.is_alive()
    }

    /// Remember a block for the next revert. No-op for anyone but Berserk.
    pub(crate) fn store_blocked_damage(&mut self, block: i64) {
        if let SuperPower::Berserk { blocked_damage } = &mut self.power {
            *blocked_damage = block;
        }
    }

    pub fn blocked_damage(&self) -> Option<i64> {
        match self.power {
            SuperPower::Berserk { blocked_damage } => Some(blocked_damage),
            _ => None,
        }
    }

    pub fn has_revived(&self) -> Option<bool> {
        match self.power {
            SuperPower::Witcher { has_revived } => Some(has_revived),
            _ => None,
        }
    }

    pub fn steal_round(&self) -> Option<bool> {
        match self.power {
            SuperPower::Hacker { steal_round } => Some(steal_round),
            _ => None,
        }
    }

    pub fn is_fake_dead(&self) -> Option<bool> {
        match self.power {
            SuperPower::TrickyBastard { fake_dead } => Some(fake_dead),
            _ => None,
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.stats, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamps_at_zero() {
        let mut stats = Stats::new("Aron", 20, 10);
        stats.take_damage(50);
        assert_eq!(stats.health(), 0);
        assert!(!stats.is_alive());

        stats.set_health(-7);
        assert_eq!(stats.health(), 0);
    }

    #[test]
    fn test_negative_construction_health_is_clamped() {
        let boss = Boss::new("Serega", -100, 50);
        assert_eq!(boss.stats.health(), 0);
    }

    #[test]
    fn test_damage_is_not_clamped() {
        let mut stats = Stats::new("Hendolf", 10, 10);
        stats.set_damage(-5);
        assert_eq!(stats.damage(), -5);
        stats.set_damage(1_000_000);
        assert_eq!(stats.damage(), 1_000_000);
    }

    #[test]
    fn test_negative_damage_heals() {
        let mut stats = Stats::new("Gatz", 100, 20);
        stats.take_damage(-5);
        assert_eq!(stats.health(), 105);
    }

    #[test]
    fn test_class_abilities() {
        assert_eq!(HeroClass::Warrior.ability(), Ability::CriticalDamage);
        assert_eq!(HeroClass::Thor.ability(), Ability::CriticalDamage);
        assert_eq!(HeroClass::TrickyBastard.ability(), Ability::CriticalDamage);
        assert_eq!(HeroClass::Magic.ability(), Ability::Boost);
        assert_eq!(HeroClass::Golem.ability(), Ability::Boost);
        assert_eq!(HeroClass::Berserk.ability(), Ability::BlockDamageAndRevert);
        assert_eq!(HeroClass::Medic.ability(), Ability::Heal);
        assert_eq!(HeroClass::Witcher.ability(), Ability::Heal);
        assert_eq!(HeroClass::Hacker.ability(), Ability::Heal);
    }

    #[test]
    fn test_power_round_trips_class() {
        for class in HeroClass::all() {
            assert_eq!(SuperPower::for_class(*class, 5).class(), *class);
        }
    }

    #[test]
    fn test_blocked_damage_only_sticks_to_berserk() {
        let mut berserk = Hero::berserk("Gatz", 260, 20);
        let mut warrior = Hero::warrior("Aron", 290, 10);

        berserk.store_blocked_damage(10);
        warrior.store_blocked_damage(10);

        assert_eq!(berserk.blocked_damage(), Some(10));
        assert_eq!(warrior.blocked_damage(), None);
        assert_eq!(warrior.power(), SuperPower::Warrior);
    }

    #[test]
    fn test_display_formats() {
        let mut boss = Boss::new("Serega", 4000, 50);
        assert_eq!(
            boss.to_string(),
            "BOSS Serega health: 4000 damage: 50 defence: None"
        );
        boss.set_defence(Some(Ability::Heal));
        assert_eq!(
            boss.to_string(),
            "BOSS Serega health: 4000 damage: 50 defence: Heal"
        );

        let hero = Hero::medic("Leonard", 250, 5, 15);
        assert_eq!(hero.to_string(), "Leonard health: 250 damage: 5");
    }
}
