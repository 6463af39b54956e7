//! ArmorInstance - A worn piece of armor and its durability

use serde::{Deserialize, Serialize};

/// A piece of armor with its own durability
///
/// Durability is carried with the instance, so unequipping and re-equipping
/// never resets it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ArmorRecord")]
pub struct ArmorInstance {
    /// Item template key
    pub item_key: String,
    /// Display name captured from the template when the instance was made
    pub name: String,
    pub max_durability: u32,
    pub current_durability: u32,
}

/// Persisted form; missing current durability means undamaged
#[derive(Deserialize)]
struct ArmorRecord {
    #[serde(default)]
    item_key: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    max_durability: u32,
    #[serde(default)]
    current_durability: Option<u32>,
}

impl From<ArmorRecord> for ArmorInstance {
    fn from(record: ArmorRecord) -> Self {
        let current = record.current_durability.unwrap_or(record.max_durability);
        ArmorInstance::new(record.item_key, record.name, record.max_durability, current)
    }
}

impl ArmorInstance {
    /// Create an instance; current durability is clamped to the max
    pub fn new(item_key: impl Into<String>, name: impl Into<String>, max_durability: u32, current_durability: u32) -> Self {
        ArmorInstance {
            item_key: item_key.into(),
            name: name.into(),
            max_durability,
            current_durability: current_durability.min(max_durability),
        }
    }

    /// A fresh instance at full durability
    pub fn pristine(item_key: impl Into<String>, name: impl Into<String>, max_durability: u32) -> Self {
        Self::new(item_key, name, max_durability, max_durability)
    }

    /// Name to show the player; falls back to the item key
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.item_key
        } else {
            &self.name
        }
    }

    pub fn is_broken(&self) -> bool {
        self.current_durability == 0
    }

    /// Remaining durability as a rounded percentage
    pub fn durability_percent(&self) -> u32 {
        if self.max_durability == 0 {
            return 0;
        }
        let current = u64::from(self.current_durability);
        let max = u64::from(self.max_durability);
        ((200 * current + max) / (2 * max)) as u32
    }

    /// Soak up to `damage`, returning how much was absorbed
    pub(crate) fn wear(&mut self, damage: u32) -> u32 {
        let absorbed = damage.min(self.current_durability);
        self.current_durability -= absorbed;
        absorbed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_durability() {
        let armor = ArmorInstance::new("cloth_cap", "Cloth Cap", 20, 35);
        assert_eq!(armor.current_durability, 20);
    }

    #[test]
    fn test_wear() {
        let mut armor = ArmorInstance::new("leather_vest", "Leather Vest", 50, 8);
        assert_eq!(armor.wear(5), 5);
        assert_eq!(armor.wear(5), 3);
        assert!(armor.is_broken());
        assert_eq!(armor.wear(5), 0);
    }

    #[test]
    fn test_durability_percent() {
        let armor = ArmorInstance::new("iron_helmet", "Iron Helmet", 60, 45);
        assert_eq!(armor.durability_percent(), 75);
        let armor = ArmorInstance::new("cloth_pants", "Cloth Pants", 20, 1);
        assert_eq!(armor.durability_percent(), 5);
    }

    #[test]
    fn test_display_name_fallback() {
        let armor = ArmorInstance::pristine("mystery_hat", "", 10);
        assert_eq!(armor.display_name(), "mystery_hat");
    }
}
