//! Ambient aggression - Enemies attacking while the player does other things

use super::result::{RetaliationHit, RetaliationReport};
use crate::character::Character;
use crate::config::CombatConstants;
use crate::damage::DamageResolver;
use crate::rng::CombatRng;
use crate::world::LocationRepository;

/// What the player just did, as far as enemy aggression cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Move,
    Look,
    Take,
    Drop,
    Equip,
    UseItem,
    Inventory,
    Status,
    /// Has its own counter-hit
    Attack,
    Sleep,
    Clear,
    Other,
}

impl PlayerAction {
    /// Whether enemies get an ambient pass after this action
    pub fn provokes_retaliation(&self) -> bool {
        !matches!(self, PlayerAction::Attack | PlayerAction::Sleep | PlayerAction::Clear)
    }
}

/// Runs the per-turn ambient aggression pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetaliationScheduler {
    aggression_chance: f64,
}

impl Default for RetaliationScheduler {
    fn default() -> Self {
        Self::new(&CombatConstants::default())
    }
}

impl RetaliationScheduler {
    pub fn new(constants: &CombatConstants) -> Self {
        RetaliationScheduler {
            aggression_chance: constants.aggression_chance,
        }
    }

    pub fn aggression_chance(&self) -> f64 {
        self.aggression_chance
    }

    /// Run a pass if `action` provokes one
    pub fn after_action<R, L>(
        &self,
        action: PlayerAction,
        resolver: &mut DamageResolver<R>,
        character: &mut Character,
        locations: &L,
        location: &str,
    ) -> RetaliationReport
    where
        R: CombatRng,
        L: LocationRepository + ?Sized,
    {
        if !action.provokes_retaliation() {
            return RetaliationReport::default();
        }
        self.run_pass(resolver, character, locations, location)
    }

    /// Give every enemy at `location` one chance to attack
    ///
    /// Enemies are visited in list order, each rolling `next_float() < chance`.
    /// The list is copied before the first roll and the pass never removes
    /// anyone.
    pub fn run_pass<R, L>(
        &self,
        resolver: &mut DamageResolver<R>,
        character: &mut Character,
        locations: &L,
        location: &str,
    ) -> RetaliationReport
    where
        R: CombatRng,
        L: LocationRepository + ?Sized,
    {
        let enemies = locations.enemies_at(location).to_vec();
        let mut hits = Vec::new();

        for enemy in &enemies {
            if resolver.rng_mut().next_float() >= self.aggression_chance {
                continue;
            }
            let raw_damage = resolver.compute_enemy_damage(enemy);
            let hit = resolver.resolve_hit(&mut character.body, &mut character.armor, raw_damage);
            tracing::debug!("{} attacks unprovoked", enemy.name);
            hits.push(RetaliationHit {
                enemy_name: enemy.name.clone(),
                hit,
            });
        }

        let player_defeated = character.is_defeated();
        RetaliationReport { hits, player_defeated }
    }
}
