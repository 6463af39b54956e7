//! Enemy - A hostile instance living in a location

use crate::damage::DamageEffect;
use serde::{Deserialize, Serialize};

/// A spawned enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Instance id, `<type>-<n>`
    pub id: String,
    /// Template key, e.g. "goblin"
    #[serde(rename = "type")]
    pub enemy_type: String,
    /// Display name, e.g. "Goblin"
    pub name: String,
    /// Goes negative on an overkill strike
    pub health: i32,
    pub max_health: i32,
    #[serde(default)]
    pub attack: DamageEffect,
    /// Carried from the template; no damage formula reads it
    #[serde(default)]
    pub defense: u32,
    /// Carried from the template for callers that place loot
    #[serde(default)]
    pub drops: Vec<String>,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Apply a strike, returning the remaining health
    pub fn take_damage(&mut self, amount: u32) -> i32 {
        let amount = i32::try_from(amount).unwrap_or(i32::MAX);
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Whether a target word names this enemy, by name or type
    pub fn answers_to(&self, target: &str) -> bool {
        self.name.eq_ignore_ascii_case(target) || self.enemy_type.eq_ignore_ascii_case(target)
    }
}
