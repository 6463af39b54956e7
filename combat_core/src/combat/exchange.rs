//! Attack exchange - The player strikes, the enemy dies or hits back

use super::result::{ExchangeOutcome, ExchangeResult};
use super::target::select_target;
use crate::character::Character;
use crate::config::CombatConstants;
use crate::damage::DamageResolver;
use crate::error::CombatError;
use crate::rng::CombatRng;
use crate::world::LocationRepository;

/// Resolves player-initiated attacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatResolver {
    kill_xp: u32,
}

impl Default for CombatResolver {
    fn default() -> Self {
        Self::new(&CombatConstants::default())
    }
}

impl CombatResolver {
    pub fn new(constants: &CombatConstants) -> Self {
        CombatResolver {
            kill_xp: constants.kill_xp,
        }
    }

    /// XP awarded for each defeated enemy
    pub fn kill_xp(&self) -> u32 {
        self.kill_xp
    }

    /// Resolve one attack against the enemy named by `argument`
    ///
    /// 1. Selects the target among enemies at `location`
    /// 2. Rolls the player's strike with the equipped weapon (or unarmed)
    /// 3. A killed enemy is removed and XP awarded; no counter-hit
    /// 4. A surviving enemy hits back once through the armor and body
    pub fn attack<R, L>(
        &self,
        resolver: &mut DamageResolver<R>,
        character: &mut Character,
        locations: &mut L,
        location: &str,
        argument: &str,
    ) -> Result<ExchangeOutcome, CombatError>
    where
        R: CombatRng,
        L: LocationRepository + ?Sized,
    {
        let target = select_target(locations.enemies_at(location), argument)?;
        let player_damage = resolver.compute_weapon_damage(character.weapon_effect());

        let enemy = locations
            .enemy_mut(location, target.index)
            .ok_or_else(|| CombatError::NoSuchTarget(argument.trim().to_string()))?;
        let enemy_health = enemy.take_damage(player_damage);
        let enemy_name = enemy.name.clone();

        if enemy_health <= 0 {
            let drops = locations
                .remove_enemy(location, target.index)
                .map(|enemy| enemy.drops)
                .unwrap_or_default();
            let levels_gained = character.progression.award_xp(self.kill_xp);
            tracing::info!("Defeated {} ({}) in {}", enemy_name, target.ordinal, location);

            return Ok(ExchangeOutcome {
                enemy_name,
                ordinal: target.ordinal,
                player_damage,
                enemy_health,
                result: ExchangeResult::EnemyDefeated {
                    xp_awarded: self.kill_xp,
                    levels_gained,
                    level: character.progression.level(),
                    drops,
                },
            });
        }

        let raw_damage = resolver.compute_enemy_damage(enemy);
        let hit = resolver.resolve_hit(&mut character.body, &mut character.armor, raw_damage);
        let player_defeated = character.is_defeated();
        if player_defeated {
            tracing::info!("Player defeated by {}", enemy_name);
        }

        Ok(ExchangeOutcome {
            enemy_name,
            ordinal: target.ordinal,
            player_damage,
            enemy_health,
            result: ExchangeResult::EnemyRetaliated { hit, player_defeated },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyCatalog;
    use crate::damage::DamageEffect;
    use crate::rng::ScriptedRng;
    use crate::types::BodyPart;
    use crate::world::Locations;

    fn setup(types: &[&str]) -> (Character, Locations) {
        let mut locations = Locations::new();
        locations.populate("cave", types, &EnemyCatalog::with_defaults());
        (Character::new(&CombatConstants::default()), locations)
    }

    #[test]
    fn test_empty_argument() {
        let (mut character, mut locations) = setup(&["goblin"]);
        let mut resolver = DamageResolver::new(ScriptedRng::new());
        let err = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "")
            .unwrap_err();
        assert_eq!(err, CombatError::MissingTarget);
    }

    #[test]
    fn test_missing_target_leaves_state_alone() {
        let (mut character, mut locations) = setup(&["goblin"]);
        let mut resolver = DamageResolver::new(ScriptedRng::new().with_ints([2]));
        let err = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "dragon")
            .unwrap_err();
        assert_eq!(err, CombatError::NoSuchTarget("dragon".to_string()));
        assert_eq!(locations.enemies_at("cave")[0].health, 25);
        // No draw was made
        assert_eq!(resolver.rng_mut().remaining(), (1, 0));
    }

    #[test]
    fn test_kill_awards_xp_without_counter() {
        let (mut character, mut locations) = setup(&["slime"]);
        character.weapon = Some(crate::character::EquippedWeapon {
            key: "club".to_string(),
            name: "Club".to_string(),
            attack: DamageEffect::Fixed(30),
        });
        let mut resolver = DamageResolver::new(ScriptedRng::new());

        let outcome = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "slime")
            .unwrap();

        assert!(outcome.enemy_defeated());
        assert_eq!(outcome.enemy_health, -10);
        assert!(locations.enemies_at("cave").is_empty());
        assert_eq!(character.progression.xp(), 25);
        assert_eq!(character.aggregate_health(), 100);
    }

    #[test]
    fn test_survivor_strikes_back() {
        let (mut character, mut locations) = setup(&["goblin"]);
        // Unarmed 2, goblin rolls 6, hits index 8 (Stomach)
        let mut resolver = DamageResolver::new(ScriptedRng::new().with_ints([2, 6, 8]));

        let outcome = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "goblin")
            .unwrap();

        assert_eq!(outcome.player_damage, 2);
        assert_eq!(outcome.enemy_health, 23);
        let hit = outcome.retaliation().unwrap();
        assert_eq!(hit.part, BodyPart::Stomach);
        assert_eq!(hit.raw_damage, 6);
        assert_eq!(character.body.part(BodyPart::Stomach).current, 44);
        assert_eq!(locations.enemies_at("cave")[0].health, 23);
    }

    #[test]
    fn test_reports_resolved_ordinal() {
        let (mut character, mut locations) = setup(&["goblin", "wolf", "goblin"]);
        let mut resolver = DamageResolver::new(ScriptedRng::new().with_ints([1, 4, 0]));

        let outcome = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "goblin 2")
            .unwrap();
        assert_eq!(outcome.ordinal, 2);
        assert_eq!(locations.enemies_at("cave")[2].health, 24);
        assert_eq!(locations.enemies_at("cave")[0].health, 25);
    }

    #[test]
    fn test_lethal_counter_hit_flags_defeat() {
        let (mut character, mut locations) = setup(&["orc"]);
        for part in BodyPart::all() {
            character.body.apply_damage(*part, 50);
        }
        character.body.heal_part(BodyPart::Head, 5);
        let mut resolver = DamageResolver::new(ScriptedRng::new().with_ints([1, 14, 2]));

        let outcome = CombatResolver::default()
            .attack(&mut resolver, &mut character, &mut locations, "cave", "orc")
            .unwrap();
        assert!(outcome.player_defeated());
        assert!(outcome.summary().ends_with("You have been defeated!"));
    }
}
