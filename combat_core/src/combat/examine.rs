//! Examine - Looking an enemy over before a fight

use super::target::select_target;
use crate::config::EnemyCatalog;
use crate::error::CombatError;
use crate::world::Enemy;
use serde::{Deserialize, Serialize};

/// What the player learns by examining an enemy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyReport {
    pub name: String,
    /// 1-based ordinal among enemies answering to the same argument
    pub ordinal: usize,
    pub health: i32,
    pub max_health: i32,
    pub description: String,
}

impl EnemyReport {
    pub fn summary(&self) -> String {
        format!(
            "{} ({}): {}/{} HP. {}",
            self.name, self.ordinal, self.health, self.max_health, self.description
        )
    }
}

/// Examine the enemy an argument refers to
///
/// Uses the same target rules as an attack, so "goblin 2" examines the
/// goblin that "attack goblin 2" would hit.
pub fn examine_enemy(enemies: &[Enemy], catalog: &EnemyCatalog, argument: &str) -> Result<EnemyReport, CombatError> {
    let target = select_target(enemies, argument)?;
    let enemy = &enemies[target.index];
    Ok(EnemyReport {
        name: enemy.name.clone(),
        ordinal: target.ordinal,
        health: enemy.health,
        max_health: enemy.max_health,
        description: catalog.description(&enemy.enemy_type).to_string(),
    })
}
