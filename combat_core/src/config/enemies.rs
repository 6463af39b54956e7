//! Enemy catalog - Templates enemies are spawned from

use super::ConfigError;
use crate::damage::DamageEffect;
use crate::world::Enemy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Health of an enemy whose type has no template
const FALLBACK_HEALTH: i32 = 20;
/// Attack of an enemy whose type has no template
const FALLBACK_ATTACK: u32 = 3;
/// Description of an enemy whose type has no template
const FALLBACK_DESCRIPTION: &str = "A mysterious creature.";

/// An enemy template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub health: i32,
    /// Defaults to `health`
    #[serde(default)]
    pub max_health: Option<i32>,
    #[serde(default)]
    pub attack: DamageEffect,
    #[serde(default)]
    pub defense: u32,
    #[serde(default)]
    pub drops: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct EnemiesConfig {
    #[serde(default)]
    enemies: Vec<EnemyTemplate>,
}

/// Read-only lookup of enemy templates by type
#[derive(Debug, Clone, Default)]
pub struct EnemyCatalog {
    templates: HashMap<String, EnemyTemplate>,
}

impl EnemyCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load enemy templates from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: EnemiesConfig = super::load_toml(path)?;
        Ok(Self::from_templates(config.enemies))
    }

    /// Parse enemy templates from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: EnemiesConfig = super::parse_toml(content)?;
        Ok(Self::from_templates(config.enemies))
    }

    /// The bundled catalog from `config/enemies.toml`
    pub fn with_defaults() -> Self {
        Self::parse(include_str!("../../config/enemies.toml")).unwrap_or_default()
    }

    fn from_templates(templates: Vec<EnemyTemplate>) -> Self {
        EnemyCatalog {
            templates: templates.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    pub fn get(&self, enemy_type: &str) -> Option<&EnemyTemplate> {
        self.templates.get(enemy_type)
    }

    /// Flavour text for an enemy type
    pub fn description(&self, enemy_type: &str) -> &str {
        match self.templates.get(enemy_type) {
            Some(template) if !template.description.is_empty() => &template.description,
            _ => FALLBACK_DESCRIPTION,
        }
    }

    /// Create instance number `index` of an enemy type
    ///
    /// Unknown types still spawn, as a 20 HP enemy hitting for 3 and named
    /// after the capitalised type.
    pub fn spawn(&self, enemy_type: &str, index: usize) -> Enemy {
        let id = format!("{}-{}", enemy_type, index);
        match self.templates.get(enemy_type) {
            Some(template) => Enemy {
                id,
                enemy_type: enemy_type.to_string(),
                name: template.name.clone(),
                health: template.health,
                max_health: template.max_health.unwrap_or(template.health),
                attack: template.attack,
                defense: template.defense,
                drops: template.drops.clone(),
            },
            None => {
                tracing::warn!("No template for enemy type '{}', using fallback", enemy_type);
                Enemy {
                    id,
                    enemy_type: enemy_type.to_string(),
                    name: capitalize(enemy_type),
                    health: FALLBACK_HEALTH,
                    max_health: FALLBACK_HEALTH,
                    attack: DamageEffect::Fixed(FALLBACK_ATTACK),
                    defense: 0,
                    drops: Vec::new(),
                }
            }
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = EnemyCatalog::with_defaults();
        for id in ["slime", "goblin", "wolf", "skeleton", "orc", "shadow"] {
            assert!(catalog.get(id).is_some(), "Missing enemy: {}", id);
        }
        let orc = catalog.get("orc").unwrap();
        assert_eq!(orc.attack, DamageEffect::Range { min: 8, max: 14 });
        assert_eq!(orc.defense, 4);
    }

    #[test]
    fn test_spawn_from_template() {
        let catalog = EnemyCatalog::with_defaults();
        let goblin = catalog.spawn("goblin", 2);
        assert_eq!(goblin.id, "goblin-2");
        assert_eq!(goblin.name, "Goblin");
        assert_eq!(goblin.health, 25);
        assert_eq!(goblin.max_health, 25);
        assert_eq!(goblin.drops, vec!["rusted_dagger".to_string()]);
    }

    #[test]
    fn test_spawn_unknown_type_falls_back() {
        let catalog = EnemyCatalog::with_defaults();
        let troll = catalog.spawn("troll", 1);
        assert_eq!(troll.name, "Troll");
        assert_eq!(troll.health, 20);
        assert_eq!(troll.attack, DamageEffect::Fixed(3));
        assert_eq!(troll.defense, 0);
    }

    #[test]
    fn test_descriptions() {
        let catalog = EnemyCatalog::with_defaults();
        assert_eq!(catalog.description("wolf"), "A wild wolf with hungry eyes and sharp fangs.");
        assert_eq!(catalog.description("troll"), FALLBACK_DESCRIPTION);
    }

    #[test]
    fn test_parse_fixed_attack() {
        let toml = r#"
[[enemies]]
id = "rat"
name = "Rat"
health = 6
attack = 2
"#;
        let catalog = EnemyCatalog::parse(toml).unwrap();
        let rat = catalog.spawn("rat", 1);
        assert_eq!(rat.attack, DamageEffect::Fixed(2));
        assert_eq!(rat.max_health, 6);
        assert_eq!(catalog.description("rat"), FALLBACK_DESCRIPTION);
    }
}
