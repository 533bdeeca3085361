//! Round resolution
//!
//! A round runs in a fixed order:
//! 1. the boss picks its defence
//! 2. the boss attacks, or shakes off a stun instead
//! 3. every hero that passes the gate hits the boss and fires its power

use super::abilities::apply_super_power;
use super::entity::{Boss, Hero};
use super::log::{CombatLog, CombatLogEventType};
use super::rng::RandomSource;
use super::CombatError;

/// Whether `hero` gets to counter-attack this round.
///
/// Both sides must still be standing and the boss must not be guarding
/// against the hero's ability.
pub fn can_act(hero: &Hero, boss: &Boss) -> bool {
    hero.is_alive() && boss.is_alive() && boss.defence() != Some(hero.ability())
}

/// Play round number `round` from the defence choice onwards.
pub fn play_round<R: RandomSource>(
    round: u32,
    boss: &mut Boss,
    heroes: &mut [Hero],
    rng: &mut R,
    log: &mut CombatLog,
) -> Result<(), CombatError> {
    log.set_round(round);
    boss.choose_defence(heroes, rng)?;
    resolve_round(boss, heroes, rng, log)
}

/// Resolve a round whose defence has already been chosen.
pub fn resolve_round<R: RandomSource>(
    boss: &mut Boss,
    heroes: &mut [Hero],
    rng: &mut R,
    log: &mut CombatLog,
) -> Result<(), CombatError> {
    if boss.stunned {
        boss.stunned = false;
        log.log(
            CombatLogEventType::CrowdControl,
            "Boss is stunned and skips its turn".to_string(),
        );
    } else {
        boss.attack(heroes, rng, log);
    }

    // The gate is re-checked for every hero; there is no early break.
    for index in 0..heroes.len() {
        if !can_act(&heroes[index], boss) {
            continue;
        }

        let damage = heroes[index].stats.damage();
        boss.stats.take_damage(damage);
        log.log(
            CombatLogEventType::Damage,
            format!(
                "{} hits Boss {} for {}",
                heroes[index].stats.name(),
                boss.stats.name(),
                damage
            ),
        );

        apply_super_power(index, boss, heroes, rng, log)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::entity::Ability;
    use crate::combat::rng::ScriptedRng;

    #[test]
    fn test_gate() {
        let mut boss = Boss::new("Serega", 100, 20);
        let hero = Hero::warrior("Aron", 50, 10);

        assert!(can_act(&hero, &boss), "no defence chosen yet");

        boss.set_defence(Some(Ability::CriticalDamage));
        assert!(!can_act(&hero, &boss));

        boss.set_defence(Some(Ability::Heal));
        assert!(can_act(&hero, &boss));

        boss.stats.set_health(0);
        assert!(!can_act(&hero, &boss));
    }

    #[test]
    fn test_fallen_hero_cannot_act() {
        let boss = Boss::new("Serega", 100, 20);
        let hero = Hero::warrior("Aron", 0, 10);
        assert!(!can_act(&hero, &boss));
    }

    #[test]
    fn test_stun_skips_one_attack() {
        let mut boss = Boss::new("Serega", 100, 20);
        boss.stunned = true;
        let mut heroes = vec![Hero::warrior("Aron", 50, 10)];
        let mut rng = ScriptedRng::new().with_ints([2, 2]);
        let mut log = CombatLog::default();

        play_round(1, &mut boss, &mut heroes, &mut rng, &mut log).unwrap();
        assert!(!boss.stunned);
        assert_eq!(heroes[0].stats.health(), 50);

        play_round(2, &mut boss, &mut heroes, &mut rng, &mut log).unwrap();
        assert_eq!(heroes[0].stats.health(), 30);
    }

    #[test]
    fn test_remaining_heroes_skip_after_boss_falls() {
        let mut boss = Boss::new("Serega", 15, 0);
        boss.set_defence(Some(Ability::Heal));
        let mut heroes = vec![
            Hero::warrior("Aron", 50, 10),
            Hero::magic("Hendolf", 50, 10),
        ];
        let mut rng = ScriptedRng::new().with_ints([2]);
        let mut log = CombatLog::default();

        resolve_round(&mut boss, &mut heroes, &mut rng, &mut log).unwrap();

        assert_eq!(boss.stats.health(), 0);
        assert_eq!(heroes[1].stats.damage(), 10, "Magic never got to boost");
    }

    #[test]
    fn test_power_fires_even_after_killing_blow() {
        let mut boss = Boss::new("Serega", 5, 0);
        boss.set_defence(Some(Ability::Heal));
        let mut heroes = vec![Hero::magic("Hendolf", 50, 10)];
        let mut rng = ScriptedRng::new().with_ints([6]);
        let mut log = CombatLog::default();

        resolve_round(&mut boss, &mut heroes, &mut rng, &mut log).unwrap();

        assert_eq!(boss.stats.health(), 0);
        assert_eq!(heroes[0].stats.damage(), 16);
    }
}
