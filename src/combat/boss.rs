//! Boss defence choice and attack
//!
//! The boss guards against one ability per round, picked from a random hero
//! of the full roster (fallen heroes included), then hits every living hero.

use super::entity::{Ability, Boss, Hero};
use super::log::{CombatLog, CombatLogEventType};
use super::rng::RandomSource;
use super::CombatError;

/// Amounts a Berserk can shave off an unguarded hit
pub const BLOCK_AMOUNTS: [i64; 2] = [5, 10];

impl Boss {
    /// Pick this round's defence from a uniformly random hero.
    pub fn choose_defence<R: RandomSource>(
        &mut self,
        heroes: &[Hero],
        rng: &mut R,
    ) -> Result<Ability, CombatError> {
        let hero = rng
            .choose(heroes)
            .ok_or(CombatError::EmptySelection("boss defence"))?;
        let defence = hero.ability();
        self.set_defence(Some(defence));
        tracing::trace!(boss = self.stats.name(), %defence, "defence chosen");
        Ok(defence)
    }

    /// Hit every living hero for the boss's damage.
    ///
    /// A block-and-revert hero blocks part of the hit unless the boss is
    /// guarding against exactly that ability this round; the block is stored
    /// on the hero for its next revert.
    pub fn attack<R: RandomSource>(
        &self,
        heroes: &mut [Hero],
        rng: &mut R,
        log: &mut CombatLog,
    ) {
        let damage = self.stats.damage();
        for hero in heroes.iter_mut().filter(|h| h.is_alive()) {
            if hero.ability() == Ability::BlockDamageAndRevert
                && self.defence() != Some(Ability::BlockDamageAndRevert)
            {
                let block = rng
                    .choose(&BLOCK_AMOUNTS)
                    .copied()
                    .unwrap_or(BLOCK_AMOUNTS[0]);
                let taken = damage.saturating_sub(block);
                hero.stats.take_damage(taken);
                hero.store_blocked_damage(block);
                log.log(
                    CombatLogEventType::Damage,
                    format!(
                        "Boss {} hits {} for {} ({} blocked)",
                        self.stats.name(),
                        hero.stats.name(),
                        taken,
                        block
                    ),
                );
            } else {
                hero.stats.take_damage(damage);
                log.log(
                    CombatLogEventType::Damage,
                    format!(
                        "Boss {} hits {} for {}",
                        self.stats.name(),
                        hero.stats.name(),
                        damage
                    ),
                );
            }
        }
    }
}
