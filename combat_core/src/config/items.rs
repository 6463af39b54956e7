//! Item catalog - Weapon, armor and potion templates

use super::ConfigError;
use crate::armor::ArmorInstance;
use crate::damage::DamageEffect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// A weapon template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponTemplate {
    pub id: String,
    pub name: String,
    /// Unset when missing or malformed; rolls the fallback damage
    #[serde(default)]
    pub attack: DamageEffect,
}

/// An armor template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorTemplate {
    pub id: String,
    pub name: String,
    /// Declared slot key, checked when the armor is equipped
    pub slot: String,
    #[serde(default)]
    pub quality: Option<String>,
    pub max_durability: u32,
    /// Starting durability; defaults to the max
    #[serde(default)]
    pub current_durability: Option<u32>,
}

impl ArmorTemplate {
    /// Make a wearable instance of this template
    pub fn instantiate(&self) -> ArmorInstance {
        ArmorInstance::new(
            self.id.clone(),
            self.name.clone(),
            self.max_durability,
            self.current_durability.unwrap_or(self.max_durability),
        )
    }
}

/// A healing potion template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionTemplate {
    pub id: String,
    pub name: String,
    /// Total healing spread over damaged body parts
    pub heal: u32,
}

/// What kind of item a key refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Weapon,
    Armor,
    Potion,
    Unknown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ItemsConfig {
    #[serde(default)]
    weapons: Vec<WeaponTemplate>,
    #[serde(default)]
    armor: Vec<ArmorTemplate>,
    #[serde(default)]
    potions: Vec<PotionTemplate>,
}

/// Read-only lookup of item templates by key
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    weapons: HashMap<String, WeaponTemplate>,
    armor: HashMap<String, ArmorTemplate>,
    potions: HashMap<String, PotionTemplate>,
}

impl From<ItemsConfig> for ItemCatalog {
    fn from(config: ItemsConfig) -> Self {
        ItemCatalog {
            weapons: config.weapons.into_iter().map(|w| (w.id.clone(), w)).collect(),
            armor: config.armor.into_iter().map(|a| (a.id.clone(), a)).collect(),
            potions: config.potions.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an item catalog from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: ItemsConfig = super::load_toml(path)?;
        Ok(config.into())
    }

    /// Parse an item catalog from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ItemsConfig = super::parse_toml(content)?;
        Ok(config.into())
    }

    /// The bundled catalog from `config/items.toml`
    pub fn with_defaults() -> Self {
        Self::parse(include_str!("../../config/items.toml")).unwrap_or_default()
    }

    pub fn weapon(&self, key: &str) -> Option<&WeaponTemplate> {
        self.weapons.get(key)
    }

    pub fn armor(&self, key: &str) -> Option<&ArmorTemplate> {
        self.armor.get(key)
    }

    pub fn potion(&self, key: &str) -> Option<&PotionTemplate> {
        self.potions.get(key)
    }

    pub fn kind(&self, key: &str) -> ItemKind {
        if self.weapons.contains_key(key) {
            ItemKind::Weapon
        } else if self.armor.contains_key(key) {
            ItemKind::Armor
        } else if self.potions.contains_key(key) {
            ItemKind::Potion
        } else {
            ItemKind::Unknown
        }
    }

    /// Display name for a key; unknown keys show as themselves
    pub fn display_name(&self, key: &str) -> String {
        self.weapons
            .get(key)
            .map(|w| w.name.clone())
            .or_else(|| self.armor.get(key).map(|a| a.name.clone()))
            .or_else(|| self.potions.get(key).map(|p| p.name.clone()))
            .unwrap_or_else(|| key.to_string())
    }

    /// Attack of a weapon key; unknown keys roll the fallback damage
    pub fn weapon_effect(&self, key: &str) -> DamageEffect {
        self.weapons.get(key).map(|w| w.attack).unwrap_or_default()
    }

    /// Find an item key from player input, matching key or name
    ///
    /// Spaces, underscores and case are ignored: "iron sword", "Iron_Sword"
    /// and "ironsword" all find `iron_sword`.
    pub fn find(&self, input: &str) -> Option<String> {
        let wanted = squash(input);
        let names = self
            .weapons
            .values()
            .map(|w| (&w.id, &w.name))
            .chain(self.armor.values().map(|a| (&a.id, &a.name)))
            .chain(self.potions.values().map(|p| (&p.id, &p.name)));

        let mut matches: Vec<&String> = names
            .filter(|(id, name)| squash(id) == wanted || squash(name) == wanted)
            .map(|(id, _)| id)
            .collect();
        matches.sort();
        matches.first().map(|id| id.to_string())
    }
}

fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads_all() {
        let catalog = ItemCatalog::with_defaults();

        for id in ["rusted_dagger", "iron_sword", "wooden_staff", "stone_axe", "hunting_bow"] {
            assert_eq!(catalog.kind(id), ItemKind::Weapon, "Missing weapon: {}", id);
        }
        for id in [
            "cloth_cap",
            "leather_helmet",
            "iron_helmet",
            "cloth_shirt",
            "leather_vest",
            "iron_breastplate",
            "cloth_pants",
            "leather_greaves",
            "iron_greaves",
        ] {
            assert_eq!(catalog.kind(id), ItemKind::Armor, "Missing armor: {}", id);
        }
        assert_eq!(catalog.potion("health_potion").unwrap().heal, 40);
    }

    #[test]
    fn test_weapon_effects() {
        let catalog = ItemCatalog::with_defaults();
        assert_eq!(catalog.weapon_effect("iron_sword"), DamageEffect::Range { min: 6, max: 10 });
        assert_eq!(catalog.weapon_effect("banana"), DamageEffect::Unset);
    }

    #[test]
    fn test_display_name_fallback() {
        let catalog = ItemCatalog::with_defaults();
        assert_eq!(catalog.display_name("leather_vest"), "Leather Vest");
        assert_eq!(catalog.display_name("mystery_box"), "mystery_box");
    }

    #[test]
    fn test_find() {
        let catalog = ItemCatalog::with_defaults();
        assert_eq!(catalog.find("iron sword").as_deref(), Some("iron_sword"));
        assert_eq!(catalog.find("Leather_Greaves").as_deref(), Some("leather_greaves"));
        assert_eq!(catalog.find("excalibur"), None);
    }

    #[test]
    fn test_armor_instantiate() {
        let catalog = ItemCatalog::with_defaults();
        let vest = catalog.armor("leather_vest").unwrap().instantiate();
        assert_eq!(vest.max_durability, 50);
        assert_eq!(vest.current_durability, 50);
        assert_eq!(vest.display_name(), "Leather Vest");
    }

    #[test]
    fn test_parse_malformed_weapon() {
        let toml = r#"
[[weapons]]
id = "wet_noodle"
name = "Wet Noodle"
attack = "floppy"

[[weapons]]
id = "club"
name = "Club"
attack = 4
"#;
        let catalog = ItemCatalog::parse(toml).unwrap();
        assert_eq!(catalog.weapon_effect("wet_noodle"), DamageEffect::Unset);
        assert_eq!(catalog.weapon_effect("club"), DamageEffect::Fixed(4));
    }
}
