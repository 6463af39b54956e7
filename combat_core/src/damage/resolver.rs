//! DamageResolver - Damage rolls and single-hit resolution

use super::effect::{DamageEffect, FALLBACK_DAMAGE};
use super::hit::HitResult;
use crate::armor::ArmorRegistry;
use crate::body::BodyModel;
use crate::config::CombatConstants;
use crate::rng::CombatRng;
use crate::types::BodyPart;
use crate::world::Enemy;

/// Rolls damage and lands hits using the injected random source
///
/// Every random draw in a turn goes through the one source held here.
#[derive(Debug, Clone)]
pub struct DamageResolver<R> {
    rng: R,
    unarmed_min: u32,
    unarmed_max: u32,
}

impl<R: CombatRng> DamageResolver<R> {
    /// Resolver with the default unarmed range (1-2)
    pub fn new(rng: R) -> Self {
        Self::with_constants(rng, &CombatConstants::default())
    }

    pub fn with_constants(rng: R, constants: &CombatConstants) -> Self {
        DamageResolver {
            rng,
            unarmed_min: constants.unarmed_min,
            unarmed_max: constants.unarmed_max,
        }
    }

    /// The shared random source
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Damage of a player strike
    ///
    /// `None` is an unarmed strike. An unset or malformed weapon effect,
    /// or a fixed attack of 0, deals the fallback damage.
    pub fn compute_weapon_damage(&mut self, effect: Option<&DamageEffect>) -> u32 {
        match effect {
            Some(DamageEffect::Fixed(0)) => FALLBACK_DAMAGE,
            Some(effect) => effect.roll(&mut self.rng),
            None => self.rng.next_int(self.unarmed_min, self.unarmed_max),
        }
    }

    /// Damage of an enemy strike
    pub fn compute_enemy_damage(&mut self, enemy: &Enemy) -> u32 {
        enemy.attack.roll(&mut self.rng)
    }

    /// Land a hit on a random body part
    ///
    /// 1. Picks a part uniformly from all eleven, destroyed or not
    /// 2. Lets the covering armor absorb what it can
    /// 3. Applies the rest to the part
    /// 4. Recomputes aggregate health
    pub fn resolve_hit(&mut self, body: &mut BodyModel, armor: &mut ArmorRegistry, raw_damage: u32) -> HitResult {
        let part = BodyPart::ALL[self.rng.next_index(BodyPart::COUNT)];
        self.resolve_hit_on(part, body, armor, raw_damage)
    }

    /// Land a hit on a chosen body part
    pub fn resolve_hit_on(
        &mut self,
        part: BodyPart,
        body: &mut BodyModel,
        armor: &mut ArmorRegistry,
        raw_damage: u32,
    ) -> HitResult {
        let absorption = armor.absorb(part, raw_damage);
        let actual_damage = raw_damage - absorption.absorbed;
        body.apply_damage(part, actual_damage);
        let aggregate_health = body.aggregate_health_percent();

        tracing::debug!(
            "Hit {} for {} ({} absorbed, {} taken), health now {}%",
            part,
            raw_damage,
            absorption.absorbed,
            actual_damage,
            aggregate_health
        );

        HitResult {
            part,
            raw_damage,
            absorbed: absorption.absorbed,
            actual_damage,
            armor_broke: absorption.broke,
            broken_armor_name: absorption.broken_name,
            aggregate_health,
        }
    }
}
