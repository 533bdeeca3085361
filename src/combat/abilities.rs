//! Special powers
//!
//! One resolver per hero class, dispatched from [`apply_super_power`]. Each
//! resolver mutates the boss and roster in place and narrates what it did to
//! the combat log. Draws happen in a fixed order per class so that a seeded
//! game replays exactly.

use smallvec::SmallVec;

use super::entity::{Boss, Hero, SuperPower};
use super::log::{CombatLog, CombatLogEventType};
use super::rng::RandomSource;
use super::CombatError;

/// Warrior critical hit multiplier
pub const CRITICAL_COEFFICIENT: (i64, i64) = (2, 5);
/// Magic damage boost
pub const BOOST_AMOUNT: (i64, i64) = (5, 10);
/// Hacker health steal
pub const STEAL_AMOUNT: (i64, i64) = (10, 30);
/// Golem shares `boss damage / GOLEM_SHARE_DIVISOR` with each ally
pub const GOLEM_SHARE_DIVISOR: i64 = 5;
/// Thor stuns and TrickyBastard fakes death on a 1 out of this many
pub const ONE_IN: i64 = 4;

/// Fire the special power of `heroes[index]`.
///
/// The caller has already checked that the hero may act this round; the
/// power itself runs unconditionally.
pub fn apply_super_power<R: RandomSource>(
    index: usize,
    boss: &mut Boss,
    heroes: &mut [Hero],
    rng: &mut R,
    log: &mut CombatLog,
) -> Result<(), CombatError> {
    let Some(hero) = heroes.get(index) else {
        return Err(CombatError::UnknownHero(index));
    };

    match hero.power() {
        SuperPower::Warrior => critical_hit(index, boss, heroes, rng, log),
        SuperPower::Magic => boost(index, heroes, rng, log),
        SuperPower::Medic { heal_points } => heal_allies(index, heal_points, heroes, log),
        SuperPower::Berserk { blocked_damage } => revert(index, blocked_damage, boss, heroes, log),
        SuperPower::Witcher { has_revived } => {
            if !has_revived {
                revive(index, heroes, log);
            }
        }
        SuperPower::Hacker { steal_round } => {
            if steal_round {
                steal(index, boss, heroes, rng, log)?;
            }
            if let SuperPower::Hacker { steal_round } = heroes[index].power_mut() {
                *steal_round = !*steal_round;
            }
        }
        SuperPower::Golem => share_damage(index, boss, heroes, log),
        SuperPower::Thor => stun(index, boss, heroes, rng, log),
        SuperPower::TrickyBastard { fake_dead } => fake_death(index, fake_dead, heroes, rng, log),
    }

    Ok(())
}

fn critical_hit<R: RandomSource>(
    index: usize,
    boss: &mut Boss,
    heroes: &[Hero],
    rng: &mut R,
    log: &mut CombatLog,
) {
    let hero = &heroes[index];
    let coefficient = rng.draw_int(CRITICAL_COEFFICIENT.0..=CRITICAL_COEFFICIENT.1);
    let hit = hero.stats.damage().saturating_mul(coefficient);
    boss.stats.take_damage(hit);
    log.log(
        CombatLogEventType::AbilityUsed,
        format!("Warrior {} hits critically {}", hero.stats.name(), hit),
    );
}

fn boost<R: RandomSource>(index: usize, heroes: &mut [Hero], rng: &mut R, log: &mut CombatLog) {
    let amount = rng.draw_int(BOOST_AMOUNT.0..=BOOST_AMOUNT.1);
    log.log(
        CombatLogEventType::AbilityUsed,
        format!(
            "Magic {} boosts heroes attack by {}",
            heroes[index].stats.name(),
            amount
        ),
    );
    for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
        let damage = hero.stats.damage();
        hero.stats.set_damage(damage.saturating_add(amount));
    }
}

fn heal_allies(index: usize, heal_points: i64, heroes: &mut [Hero], log: &mut CombatLog) {
    let mut healed = 0;
    for (i, hero) in heroes.iter_mut().enumerate() {
        if i != index && hero.is_alive() {
            hero.stats.heal(heal_points);
            healed += 1;
        }
    }
    log.log(
        CombatLogEventType::Healing,
        format!(
            "Medic {} heals {} heroes for {}",
            heroes[index].stats.name(),
            healed,
            heal_points
        ),
    );
}

fn revert(
    index: usize,
    blocked_damage: i64,
    boss: &mut Boss,
    heroes: &[Hero],
    log: &mut CombatLog,
) {
    boss.stats.take_damage(blocked_damage);
    log.log(
        CombatLogEventType::AbilityUsed,
        format!(
            "Berserk {} reverted {}",
            heroes[index].stats.name(),
            blocked_damage
        ),
    );
}

/// Give the Witcher's own health to the first fallen hero, once per game.
fn revive(index: usize, heroes: &mut [Hero], log: &mut CombatLog) {
    let Some(target) = heroes.iter().position(|h| !h.is_alive()) else {
        return;
    };

    log.log(
        CombatLogEventType::AbilityUsed,
        format!(
            "Witcher {} gives up their life to revive {}",
            heroes[index].stats.name(),
            heroes[target].stats.name()
        ),
    );
    let health = heroes[index].stats.health();
    heroes[target].stats.set_health(health);
    heroes[index].stats.set_health(0);
    if let SuperPower::Witcher { has_revived } = heroes[index].power_mut() {
        *has_revived = true;
    }
}

fn steal<R: RandomSource>(
    index: usize,
    boss: &mut Boss,
    heroes: &mut [Hero],
    rng: &mut R,
    log: &mut CombatLog,
) -> Result<(), CombatError> {
    let amount = rng.draw_int(STEAL_AMOUNT.0..=STEAL_AMOUNT.1);
    let living: SmallVec<[usize; 16]> = heroes
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_alive())
        .map(|(i, _)| i)
        .collect();
    let target = *rng
        .choose(living.as_slice())
        .ok_or(CombatError::EmptySelection("hacker steal target"))?;

    boss.stats.take_damage(amount);
    heroes[target].stats.heal(amount);
    log.log(
        CombatLogEventType::AbilityUsed,
        format!(
            "Hacker {} steals {} health from Boss and gives it to {}",
            heroes[index].stats.name(),
            amount,
            heroes[target].stats.name()
        ),
    );
    Ok(())
}

/// Golem soaks a fifth of the boss's damage on behalf of every living ally.
fn share_damage(index: usize, boss: &Boss, heroes: &mut [Hero], log: &mut CombatLog) {
    let shared = boss.stats.damage() / GOLEM_SHARE_DIVISOR;
    log.log(
        CombatLogEventType::AbilityUsed,
        format!(
            "Golem {} takes {} damage from each hero",
            heroes[index].stats.name(),
            shared
        ),
    );
    for i in 0..heroes.len() {
        if i != index && heroes[i].is_alive() {
            heroes[i].stats.heal(shared);
            heroes[index].stats.take_damage(shared);
        }
    }
}

fn stun<R: RandomSource>(
    index: usize,
    boss: &mut Boss,
    heroes: &[Hero],
    rng: &mut R,
    log: &mut CombatLog,
) {
    if rng.draw_int(1..=ONE_IN) == 1 {
        boss.stunned = true;
        log.log(
            CombatLogEventType::CrowdControl,
            format!("Thor {} stunned the Boss!", heroes[index].stats.name()),
        );
    }
}

fn fake_death<R: RandomSource>(
    index: usize,
    fake_dead: bool,
    heroes: &mut [Hero],
    rng: &mut R,
    log: &mut CombatLog,
) {
    let name = heroes[index].stats.name().to_string();
    let next = if !fake_dead {
        if rng.draw_int(1..=ONE_IN) != 1 {
            return;
        }
        log.log(
            CombatLogEventType::AbilityUsed,
            format!("TrickyBastard {} pretends to be dead", name),
        );
        true
    } else {
        log.log(
            CombatLogEventType::AbilityUsed,
            format!("TrickyBastard {} is back in the fight", name),
        );
        false
    };

    if let SuperPower::TrickyBastard { fake_dead } = heroes[index].power_mut() {
        *fake_dead = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::rng::ScriptedRng;

    fn fire(index: usize, boss: &mut Boss, heroes: &mut [Hero], rng: &mut ScriptedRng) -> CombatLog {
        let mut log = CombatLog::default();
        apply_super_power(index, boss, heroes, rng, &mut log).unwrap();
        log
    }

    #[test]
    fn test_warrior_critical_hit() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::warrior("Aron", 50, 10)];
        let log = fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new().with_ints([3]));

        assert_eq!(boss.stats.health(), 70);
        assert_eq!(log.entries[0].message, "Warrior Aron hits critically 30");
    }

    #[test]
    fn test_magic_boosts_living_heroes_including_self() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![
            Hero::magic("Hendolf", 270, 10),
            Hero::warrior("Aron", 0, 10),
            Hero::thor("Thor", 300, 20),
        ];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new().with_ints([7]));

        assert_eq!(heroes[0].stats.damage(), 17);
        assert_eq!(heroes[1].stats.damage(), 10);
        assert_eq!(heroes[2].stats.damage(), 27);
    }

    #[test]
    fn test_medic_heals_others_only() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![
            Hero::warrior("Aron", 100, 10),
            Hero::medic("Leonard", 100, 5, 15),
            Hero::warrior("Hektor", 0, 15),
        ];
        fire(1, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].stats.health(), 115);
        assert_eq!(heroes[1].stats.health(), 100);
        assert_eq!(heroes[2].stats.health(), 0);
    }

    #[test]
    fn test_two_medics_heal_each_other() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![
            Hero::medic("Leonard", 100, 5, 15),
            Hero::medic("Sacura", 100, 5, 5),
        ];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new());
        fire(1, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].stats.health(), 105);
        assert_eq!(heroes[1].stats.health(), 115);
    }

    #[test]
    fn test_berserk_reverts_zero_when_never_blocked() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::berserk("Gatz", 260, 20)];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(boss.stats.health(), 100);
    }

    #[test]
    fn test_witcher_revives_first_fallen_once() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![
            Hero::warrior("Aron", 0, 10),
            Hero::witcher("Geralt", 120, 0),
            Hero::warrior("Hektor", 0, 15),
        ];
        fire(1, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].stats.health(), 120);
        assert_eq!(heroes[1].stats.health(), 0);
        assert_eq!(heroes[2].stats.health(), 0);
        assert_eq!(heroes[1].has_revived(), Some(true));

        // Already used: no effect even if called again.
        heroes[1].stats.set_health(50);
        let log = fire(1, &mut boss, &mut heroes, &mut ScriptedRng::new());
        assert!(log.entries.is_empty());
        assert_eq!(heroes[2].stats.health(), 0);
        assert_eq!(heroes[1].stats.health(), 50);
    }

    #[test]
    fn test_witcher_noop_without_fallen() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::witcher("Geralt", 300, 0), Hero::warrior("Aron", 10, 10)];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].has_revived(), Some(false));
        assert_eq!(heroes[0].stats.health(), 300);
    }

    #[test]
    fn test_hacker_steals_then_rests() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::hacker("Neo", 280, 10), Hero::warrior("Aron", 50, 10)];
        let mut rng = ScriptedRng::new().with_ints([25]).with_picks([1]);

        fire(0, &mut boss, &mut heroes, &mut rng);
        assert_eq!(boss.stats.health(), 75);
        assert_eq!(heroes[1].stats.health(), 75);
        assert_eq!(heroes[0].steal_round(), Some(false));

        let log = fire(0, &mut boss, &mut heroes, &mut rng);
        assert!(log.entries.is_empty());
        assert_eq!(boss.stats.health(), 75);
        assert_eq!(heroes[0].steal_round(), Some(true));
    }

    #[test]
    fn test_hacker_without_living_target() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::hacker("Neo", 0, 10)];
        let mut log = CombatLog::default();

        let result = apply_super_power(0, &mut boss, &mut heroes, &mut ScriptedRng::new(), &mut log);

        assert_eq!(result, Err(CombatError::EmptySelection("hacker steal target")));
        assert_eq!(boss.stats.health(), 100);
    }

    #[test]
    fn test_golem_shares_per_ally() {
        let mut boss = Boss::new("Serega", 4000, 50);
        let mut heroes = vec![
            Hero::golem("Rocky", 500, 5),
            Hero::warrior("Aron", 100, 10),
            Hero::warrior("Hektor", 0, 15),
            Hero::magic("Hendolf", 100, 10),
        ];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].stats.health(), 480);
        assert_eq!(heroes[1].stats.health(), 110);
        assert_eq!(heroes[2].stats.health(), 0);
        assert_eq!(heroes[3].stats.health(), 110);
    }

    #[test]
    fn test_golem_share_truncates_to_zero() {
        let mut boss = Boss::new("Serega", 4000, 4);
        let mut heroes = vec![Hero::golem("Rocky", 500, 5), Hero::warrior("Aron", 100, 10)];
        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new());

        assert_eq!(heroes[0].stats.health(), 500);
        assert_eq!(heroes[1].stats.health(), 100);
    }

    #[test]
    fn test_thor_stuns_on_one() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::thor("Thor", 300, 20)];

        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new().with_ints([2]));
        assert!(!boss.stunned);

        fire(0, &mut boss, &mut heroes, &mut ScriptedRng::new().with_ints([1]));
        assert!(boss.stunned);
    }

    #[test]
    fn test_tricky_bastard_toggles() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut heroes = vec![Hero::tricky_bastard("Loki", 250, 15)];
        let mut rng = ScriptedRng::new().with_ints([3, 1]);

        fire(0, &mut boss, &mut heroes, &mut rng);
        assert_eq!(heroes[0].is_fake_dead(), Some(false));

        fire(0, &mut boss, &mut heroes, &mut rng);
        assert_eq!(heroes[0].is_fake_dead(), Some(true));

        // Reverting never draws.
        fire(0, &mut boss, &mut heroes, &mut rng);
        assert_eq!(heroes[0].is_fake_dead(), Some(false));
        assert_eq!(rng.remaining(), (0, 0));
        assert_eq!(heroes[0].stats.health(), 250);
    }

    #[test]
    fn test_unknown_hero_index() {
        let mut boss = Boss::new("Serega", 100, 20);
        let mut log = CombatLog::default();
        let result = apply_super_power(3, &mut boss, &mut [], &mut ScriptedRng::new(), &mut log);
        assert_eq!(result, Err(CombatError::UnknownHero(3)));
    }
}
