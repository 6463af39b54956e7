//! Character - Everything combat reads or changes on the player

mod inventory;
mod loadout;

pub use inventory::Inventory;
pub use loadout::{ArmorChange, Loadout};

use crate::armor::ArmorRegistry;
use crate::body::BodyModel;
use crate::config::{CombatConstants, ItemCatalog};
use crate::damage::DamageEffect;
use crate::progression::ProgressionTracker;
use serde::{Deserialize, Serialize};

/// The weapon in the character's hand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedWeapon {
    pub key: String,
    pub name: String,
    pub attack: DamageEffect,
}

/// The player character
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub body: BodyModel,
    pub armor: ArmorRegistry,
    pub progression: ProgressionTracker,
    pub weapon: Option<EquippedWeapon>,
    pub inventory: Inventory,
}

impl Character {
    /// A fresh character: full health, level 1, nothing equipped
    pub fn new(constants: &CombatConstants) -> Self {
        Character {
            body: BodyModel::new(constants.part_max_health),
            armor: ArmorRegistry::new(),
            progression: ProgressionTracker::new(constants.progression),
            weapon: None,
            inventory: Inventory::new(),
        }
    }

    /// Attack of the equipped weapon; `None` when unarmed
    pub fn weapon_effect(&self) -> Option<&DamageEffect> {
        self.weapon.as_ref().map(|w| &w.attack)
    }

    pub fn aggregate_health(&self) -> u32 {
        self.body.aggregate_health_percent()
    }

    pub fn is_defeated(&self) -> bool {
        self.body.is_defeated()
    }

    /// Equip and use items against a catalog
    pub fn loadout<'a>(&'a mut self, catalog: &'a ItemCatalog) -> Loadout<'a> {
        Loadout::new(self, catalog)
    }
}
