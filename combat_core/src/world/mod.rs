//! Locations - Where enemies live between turns

mod enemy;

pub use enemy::Enemy;

use crate::config::EnemyCatalog;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Access to the enemies standing in each location
///
/// Combat never reaches into a global world table; the resolvers receive
/// an implementation of this trait for the turn they are resolving.
pub trait LocationRepository {
    /// Enemies at a location, in list order (empty for unknown locations)
    fn enemies_at(&self, location: &str) -> &[Enemy];

    /// Mutable access to one enemy
    fn enemy_mut(&mut self, location: &str, index: usize) -> Option<&mut Enemy>;

    /// Remove an enemy, shifting later enemies down
    fn remove_enemy(&mut self, location: &str, index: usize) -> Option<Enemy>;
}

/// In-memory location table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Locations {
    #[serde(default)]
    enemies: HashMap<String, Vec<Enemy>>,
}

impl Locations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn an enemy from its template, numbered by its position in the location
    pub fn spawn(&mut self, location: &str, enemy_type: &str, catalog: &EnemyCatalog) -> &Enemy {
        let list = self.enemies.entry(location.to_string()).or_default();
        let enemy = catalog.spawn(enemy_type, list.len() + 1);
        tracing::debug!("Spawned {} in {}", enemy.id, location);
        list.push(enemy);
        &list[list.len() - 1]
    }

    /// Spawn a list of enemy types into a location
    pub fn populate(&mut self, location: &str, enemy_types: &[&str], catalog: &EnemyCatalog) {
        for enemy_type in enemy_types {
            self.spawn(location, enemy_type, catalog);
        }
    }
}

impl LocationRepository for Locations {
    fn enemies_at(&self, location: &str) -> &[Enemy] {
        self.enemies.get(location).map(Vec::as_slice).unwrap_or(&[])
    }

    fn enemy_mut(&mut self, location: &str, index: usize) -> Option<&mut Enemy> {
        self.enemies.get_mut(location)?.get_mut(index)
    }

    fn remove_enemy(&mut self, location: &str, index: usize) -> Option<Enemy> {
        let list = self.enemies.get_mut(location)?;
        if index < list.len() {
            Some(list.remove(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_numbers_instances() {
        let catalog = EnemyCatalog::with_defaults();
        let mut locations = Locations::new();
        locations.populate("cave", &["goblin", "goblin", "wolf"], &catalog);

        let ids: Vec<_> = locations.enemies_at("cave").iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["goblin-1", "goblin-2", "wolf-3"]);
    }

    #[test]
    fn test_unknown_location_is_empty() {
        let locations = Locations::new();
        assert!(locations.enemies_at("nowhere").is_empty());
    }

    #[test]
    fn test_remove_enemy() {
        let catalog = EnemyCatalog::with_defaults();
        let mut locations = Locations::new();
        locations.populate("cave", &["slime", "orc"], &catalog);

        let removed = locations.remove_enemy("cave", 0).unwrap();
        assert_eq!(removed.enemy_type, "slime");
        assert_eq!(locations.enemies_at("cave")[0].enemy_type, "orc");
        assert!(locations.remove_enemy("cave", 5).is_none());
        assert!(locations.remove_enemy("void", 0).is_none());
    }

    #[test]
    fn test_enemy_mut() {
        let catalog = EnemyCatalog::with_defaults();
        let mut locations = Locations::new();
        locations.spawn("field", "wolf", &catalog);

        locations.enemy_mut("field", 0).unwrap().take_damage(10);
        assert_eq!(locations.enemies_at("field")[0].health, 20);
    }
}
