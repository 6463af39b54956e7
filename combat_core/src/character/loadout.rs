//! Loadout - Moving items between the inventory and the character

use super::{Character, EquippedWeapon};
use crate::config::ItemCatalog;
use crate::error::CombatError;
use crate::types::ArmorSlot;

/// What an armor equip did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorChange {
    pub slot: ArmorSlot,
    /// Name of the piece now worn
    pub equipped: String,
    /// Name of the piece taken off to make room
    pub displaced: Option<String>,
}

/// Equip and use operations for one character
pub struct Loadout<'a> {
    character: &'a mut Character,
    catalog: &'a ItemCatalog,
}

impl<'a> Loadout<'a> {
    pub fn new(character: &'a mut Character, catalog: &'a ItemCatalog) -> Self {
        Loadout { character, catalog }
    }

    /// Wield a weapon from the inventory
    ///
    /// The weapon stays counted in the inventory while wielded.
    pub fn equip_weapon(&mut self, key: &str) -> Result<EquippedWeapon, CombatError> {
        let catalog = self.catalog;
        let name = catalog.display_name(key);
        if !self.character.inventory.has(key) {
            return Err(CombatError::NotInInventory(name));
        }
        let template = catalog.weapon(key).ok_or(CombatError::NotWeapon(name))?;

        tracing::debug!("Wielding {}", template.name);
        let weapon = EquippedWeapon {
            key: template.id.clone(),
            name: template.name.clone(),
            attack: template.attack,
        };
        self.character.weapon = Some(weapon.clone());
        Ok(weapon)
    }

    /// Put the weapon away, returning it
    pub fn unequip_weapon(&mut self) -> Option<EquippedWeapon> {
        self.character.weapon.take()
    }

    /// Wear a piece of armor from the inventory
    ///
    /// A stashed instance keeps the durability it was taken off with;
    /// otherwise a fresh one is made from the template. Whatever was in the
    /// slot goes back into the inventory.
    pub fn equip_armor(&mut self, key: &str) -> Result<ArmorChange, CombatError> {
        let catalog = self.catalog;
        let name = catalog.display_name(key);
        if !self.character.inventory.has(key) {
            return Err(CombatError::NotInInventory(name));
        }
        let template = catalog.armor(key).ok_or(CombatError::NotArmor(name))?;
        let slot = ArmorSlot::from_key(&template.slot)
            .ok_or_else(|| CombatError::InvalidSlot(template.slot.clone()))?;

        let armor = self.character.inventory.take_stashed(key).unwrap_or_else(|| template.instantiate());
        let equipped = armor.display_name().to_string();
        let displaced = self.character.armor.equip_in(slot, armor)?;

        self.character.inventory.remove(key);
        let displaced = displaced.map(|previous| {
            let previous_name = previous.display_name().to_string();
            self.character.inventory.return_armor(previous);
            previous_name
        });

        Ok(ArmorChange {
            slot,
            equipped,
            displaced,
        })
    }

    /// Take off the armor in a slot, returning its name
    pub fn unequip_armor(&mut self, slot: ArmorSlot) -> Result<String, CombatError> {
        let armor = self.character.armor.unequip(slot)?;
        let name = armor.display_name().to_string();
        self.character.inventory.return_armor(armor);
        Ok(name)
    }

    /// Drink a healing potion, returning the health restored
    ///
    /// The potion's healing is split evenly over damaged parts.
    pub fn drink_potion(&mut self, key: &str) -> Result<u32, CombatError> {
        let catalog = self.catalog;
        let name = catalog.display_name(key);
        if !self.character.inventory.has(key) {
            return Err(CombatError::NotInInventory(name));
        }
        let potion = catalog.potion(key).ok_or(CombatError::NotDrinkable(name))?;

        let healed = self.character.body.distribute_heal(potion.heal);
        self.character.inventory.remove(key);
        tracing::debug!("Drank {}, healed {}", potion.name, healed);
        Ok(healed)
    }
}
