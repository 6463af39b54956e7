//! CombatEngine - One random source shared by every combat operation

use crate::body::{self, RestOutcome};
use crate::character::Character;
use crate::combat::{CombatResolver, ExchangeOutcome, PlayerAction, RetaliationReport, RetaliationScheduler};
use crate::config::CombatConstants;
use crate::damage::{DamageResolver, HitResult};
use crate::error::CombatError;
use crate::rng::CombatRng;
use crate::world::LocationRepository;

/// Attack, ambient aggression, direct hits and rest, drawing from one source
#[derive(Debug, Clone)]
pub struct CombatEngine<R> {
    resolver: DamageResolver<R>,
    combat: CombatResolver,
    retaliation: RetaliationScheduler,
}

impl<R: CombatRng> CombatEngine<R> {
    pub fn new(rng: R, constants: &CombatConstants) -> Self {
        CombatEngine {
            resolver: DamageResolver::with_constants(rng, constants),
            combat: CombatResolver::new(constants),
            retaliation: RetaliationScheduler::new(constants),
        }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        self.resolver.rng_mut()
    }

    /// Resolve one player attack
    pub fn attack<L>(
        &mut self,
        character: &mut Character,
        locations: &mut L,
        location: &str,
        argument: &str,
    ) -> Result<ExchangeOutcome, CombatError>
    where
        L: LocationRepository + ?Sized,
    {
        self.combat
            .attack(&mut self.resolver, character, locations, location, argument)
    }

    /// Ambient pass following a non-attack action
    pub fn after_action<L>(
        &mut self,
        action: PlayerAction,
        character: &mut Character,
        locations: &L,
        location: &str,
    ) -> RetaliationReport
    where
        L: LocationRepository + ?Sized,
    {
        self.retaliation
            .after_action(action, &mut self.resolver, character, locations, location)
    }

    /// Hit a random part for `raw_damage`, armor applying as usual
    pub fn damage_random_part(&mut self, character: &mut Character, raw_damage: u32) -> HitResult {
        self.resolver
            .resolve_hit(&mut character.body, &mut character.armor, raw_damage)
    }

    /// Rest for `hours` and `minutes`
    pub fn rest(&mut self, character: &mut Character, hours: u32, minutes: u32) -> RestOutcome {
        body::rest(&mut character.body, hours, minutes, self.resolver.rng_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyCatalog;
    use crate::rng::ScriptedRng;
    use crate::types::BodyPart;
    use crate::world::Locations;

    #[test]
    fn test_shared_source() {
        let mut locations = Locations::new();
        locations.populate("road", &["wolf"], &EnemyCatalog::with_defaults());
        let mut character = Character::new(&CombatConstants::default());
        // Attack: unarmed 1, wolf 6, Head. Ambient pass: wolf rolls 0.2, 10, Nose.
        let rng = ScriptedRng::new().with_ints([1, 6, 2, 10, 3]).with_floats([0.2]);
        let mut engine = CombatEngine::new(rng, &CombatConstants::default());

        let outcome = engine.attack(&mut character, &mut locations, "road", "wolf").unwrap();
        assert_eq!(outcome.retaliation().unwrap().part, BodyPart::Head);

        let report = engine.after_action(PlayerAction::Move, &mut character, &locations, "road");
        assert_eq!(report.hits.len(), 1);
        assert_eq!(report.hits[0].hit.part, BodyPart::Nose);
        assert_eq!(engine.rng_mut().remaining(), (0, 0));
    }

    #[test]
    fn test_damage_random_part() {
        let mut character = Character::new(&CombatConstants::default());
        let mut engine = CombatEngine::new(ScriptedRng::new().with_ints([9]), &CombatConstants::default());
        let hit = engine.damage_random_part(&mut character, 25);
        assert_eq!(hit.part, BodyPart::RightLeg);
        assert_eq!(character.body.part(BodyPart::RightLeg).current, 25);
    }

    #[test]
    fn test_rest_heals() {
        let mut character = Character::new(&CombatConstants::default());
        character.body.apply_damage(BodyPart::Mouth, 10);
        let mut engine = CombatEngine::new(ScriptedRng::new(), &CombatConstants::default());
        let outcome = engine.rest(&mut character, 1, 30);
        // 2 flat, then 8 single points to the only damaged part
        assert_eq!(outcome.flat_healed, 2);
        assert_eq!(outcome.trickle_healed, 8);
        assert_eq!(character.body.part(BodyPart::Mouth).current, 50);
    }
}
