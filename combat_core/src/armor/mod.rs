//! Armor system - Equipped slots, durability and damage absorption
//!
//! Armor soaks damage point-for-point out of its durability. A piece whose
//! durability reaches zero is destroyed on the spot: it leaves its slot and
//! is never returned to the inventory.

mod instance;

pub use instance::ArmorInstance;

use crate::error::CombatError;
use crate::types::{ArmorSlot, BodyPart};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which slot protects each body part, indexed by `BodyPart as usize`
const SLOT_FOR_PART: [ArmorSlot; BodyPart::COUNT] = [
    ArmorSlot::Head,  // Right Eye
    ArmorSlot::Head,  // Left Eye
    ArmorSlot::Head,  // Head
    ArmorSlot::Head,  // Nose
    ArmorSlot::Head,  // Mouth
    ArmorSlot::Torso, // Right Arm
    ArmorSlot::Torso, // Left Arm
    ArmorSlot::Torso, // Torso
    ArmorSlot::Torso, // Stomach
    ArmorSlot::Legs,  // Right Leg
    ArmorSlot::Legs,  // Left Leg
];

/// Result of armor absorbing a hit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsorbResult {
    /// Damage soaked by the armor
    pub absorbed: u32,
    /// Whether the armor was destroyed by this hit
    pub broke: bool,
    /// Display name of the destroyed armor
    pub broken_name: Option<String>,
}

/// One line of an armor status report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorStatus {
    pub slot: ArmorSlot,
    pub name: String,
    pub durability: u32,
    pub max_durability: u32,
    pub percent: u32,
}

/// Equipped armor, at most one instance per slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SlotRecord", into = "SlotRecord")]
pub struct ArmorRegistry {
    slots: BTreeMap<ArmorSlot, ArmorInstance>,
}

/// Persisted form; absent slots are empty
type SlotRecord = BTreeMap<ArmorSlot, Option<ArmorInstance>>;

impl From<SlotRecord> for ArmorRegistry {
    fn from(record: SlotRecord) -> Self {
        let slots = record
            .into_iter()
            .filter_map(|(slot, armor)| armor.map(|a| (slot, a)))
            .filter(|(_, armor)| !armor.is_broken())
            .collect();
        ArmorRegistry { slots }
    }
}

impl From<ArmorRegistry> for SlotRecord {
    fn from(registry: ArmorRegistry) -> Self {
        let mut slots = registry.slots;
        ArmorSlot::all()
            .iter()
            .map(|slot| (*slot, slots.remove(slot)))
            .collect()
    }
}

impl ArmorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot that protects a body part
    pub fn slot_for(part: BodyPart) -> ArmorSlot {
        SLOT_FOR_PART[part as usize]
    }

    /// Armor currently in a slot
    pub fn get(&self, slot: ArmorSlot) -> Option<&ArmorInstance> {
        self.slots.get(&slot)
    }

    /// Armor protecting a body part
    pub fn protecting(&self, part: BodyPart) -> Option<&ArmorInstance> {
        self.get(Self::slot_for(part))
    }

    /// Iterate over occupied slots
    pub fn equipped(&self) -> impl Iterator<Item = (ArmorSlot, &ArmorInstance)> {
        self.slots.iter().map(|(slot, armor)| (*slot, armor))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Equip armor into the slot its template declares
    ///
    /// Any occupant is unequipped first with its durability untouched and
    /// handed back to the caller.
    pub fn equip(&mut self, declared_slot: &str, armor: ArmorInstance) -> Result<Option<ArmorInstance>, CombatError> {
        let slot = ArmorSlot::from_key(declared_slot)
            .ok_or_else(|| CombatError::InvalidSlot(declared_slot.to_string()))?;
        self.equip_in(slot, armor)
    }

    /// Equip armor into a known slot
    pub fn equip_in(&mut self, slot: ArmorSlot, armor: ArmorInstance) -> Result<Option<ArmorInstance>, CombatError> {
        if armor.is_broken() {
            return Err(CombatError::BrokenArmor(armor.display_name().to_string()));
        }
        let previous = self.slots.remove(&slot);
        tracing::debug!("Equipped {} in {}", armor.display_name(), slot);
        self.slots.insert(slot, armor);
        Ok(previous)
    }

    /// Remove and return the armor in a slot, unchanged
    pub fn unequip(&mut self, slot: ArmorSlot) -> Result<ArmorInstance, CombatError> {
        self.slots.remove(&slot).ok_or(CombatError::EmptySlot(slot))
    }

    /// Let the armor covering `part` soak up to `raw_damage`
    ///
    /// Destroys the armor if its durability hits zero.
    pub fn absorb(&mut self, part: BodyPart, raw_damage: u32) -> AbsorbResult {
        let slot = Self::slot_for(part);
        let Some(armor) = self.slots.get_mut(&slot) else {
            tracing::debug!("No armor covering {}", part);
            return AbsorbResult::default();
        };
        if armor.is_broken() {
            return AbsorbResult::default();
        }

        let absorbed = armor.wear(raw_damage);
        tracing::debug!(
            "{} absorbed {} of {} damage to {} ({}/{})",
            armor.display_name(),
            absorbed,
            raw_damage,
            part,
            armor.current_durability,
            armor.max_durability
        );

        if !armor.is_broken() {
            return AbsorbResult {
                absorbed,
                broke: false,
                broken_name: None,
            };
        }

        let broken_name = self
            .slots
            .remove(&slot)
            .map(|armor| armor.display_name().to_string());
        tracing::info!("Armor destroyed in {}: {:?}", slot, broken_name);

        AbsorbResult {
            absorbed,
            broke: true,
            broken_name,
        }
    }

    /// Durability report for every occupied slot
    pub fn status(&self) -> Vec<ArmorStatus> {
        self.equipped()
            .map(|(slot, armor)| ArmorStatus {
                slot,
                name: armor.display_name().to_string(),
                durability: armor.current_durability,
                max_durability: armor.max_durability,
                percent: armor.durability_percent(),
            })
            .collect()
    }
}
