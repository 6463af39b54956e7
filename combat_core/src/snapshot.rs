//! CharacterSnapshot - Saving and restoring combat state as JSON

use crate::armor::ArmorRegistry;
use crate::body::BodyModel;
use crate::character::{Character, EquippedWeapon, Inventory};
use crate::config::{CombatConstants, ConfigError, ItemCatalog};
use crate::progression::ProgressionTracker;
use serde::{Deserialize, Serialize};

/// Persisted combat state of a character
///
/// Every field is optional on load: a missing body is full health, missing
/// armor slots are empty and missing progression is level 1.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    #[serde(default)]
    pub body: BodyModel,
    #[serde(default)]
    pub armor: ArmorRegistry,
    #[serde(default)]
    pub progression: ProgressionTracker,
    /// Item key of the wielded weapon
    #[serde(default)]
    pub weapon: Option<String>,
    #[serde(default)]
    pub inventory: Inventory,
}

impl CharacterSnapshot {
    pub fn capture(character: &Character) -> Self {
        CharacterSnapshot {
            body: character.body.clone(),
            armor: character.armor.clone(),
            progression: character.progression,
            weapon: character.weapon.as_ref().map(|w| w.key.clone()),
            inventory: character.inventory.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Rebuild a character, looking the weapon back up in the catalog
    ///
    /// A weapon key missing from the catalog is kept under its key and
    /// strikes for the fallback damage.
    pub fn restore(self, catalog: &ItemCatalog, constants: &CombatConstants) -> Character {
        let mut progression = self.progression;
        progression.set_constants(constants.progression);

        let weapon = self.weapon.map(|key| EquippedWeapon {
            name: catalog.display_name(&key),
            attack: catalog.weapon_effect(&key),
            key,
        });

        Character {
            body: self.body,
            armor: self.armor,
            progression,
            weapon,
            inventory: self.inventory,
        }
    }
}
