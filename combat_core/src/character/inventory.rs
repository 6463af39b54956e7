//! Inventory - Item counts and stashed armor

use crate::armor::ArmorInstance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items the character carries
///
/// Armor taken off is kept as an instance in the stash so its durability
/// survives until it is worn again. Every stashed instance is also counted
/// in `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "InventoryRecord")]
pub struct Inventory {
    items: BTreeMap<String, u32>,
    stash: Vec<ArmorInstance>,
}

#[derive(Deserialize)]
struct InventoryRecord {
    #[serde(default)]
    items: BTreeMap<String, u32>,
    #[serde(default)]
    stash: Vec<ArmorInstance>,
}

impl From<InventoryRecord> for Inventory {
    fn from(record: InventoryRecord) -> Self {
        let mut inventory = Inventory {
            items: record.items.into_iter().filter(|(_, count)| *count > 0).collect(),
            stash: Vec::new(),
        };
        for armor in record.stash {
            if armor.is_broken() || inventory.stashed_count(&armor.item_key) >= inventory.count(&armor.item_key) {
                continue;
            }
            inventory.stash.push(armor);
        }
        inventory
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.items.entry(key.to_string()).or_insert(0) += count;
    }

    /// Remove one of an item, returning false if there was none
    ///
    /// A stashed instance beyond the new count is discarded.
    pub fn remove(&mut self, key: &str) -> bool {
        let Some(count) = self.items.get_mut(key) else {
            return false;
        };
        *count -= 1;
        let remaining = *count;
        if remaining == 0 {
            self.items.remove(key);
        }
        if self.stashed_count(key) > remaining as usize {
            if let Some(pos) = self.stash.iter().rposition(|a| a.item_key == key) {
                self.stash.remove(pos);
            }
        }
        true
    }

    pub fn count(&self, key: &str) -> usize {
        self.items.get(key).copied().unwrap_or(0) as usize
    }

    pub fn has(&self, key: &str) -> bool {
        self.count(key) > 0
    }

    /// `(key, count)` pairs in key order
    pub fn items(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(key, count)| (key.as_str(), *count))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Put worn armor back into the pack
    pub fn return_armor(&mut self, armor: ArmorInstance) {
        self.add(&armor.item_key, 1);
        if !armor.is_broken() {
            self.stash.push(armor);
        }
    }

    /// Take the first stashed instance of an armor key out of the stash
    ///
    /// The item count is left alone; the caller removes the item when the
    /// instance is actually worn.
    pub(crate) fn take_stashed(&mut self, key: &str) -> Option<ArmorInstance> {
        let pos = self.stash.iter().position(|a| a.item_key == key)?;
        Some(self.stash.remove(pos))
    }

    /// Stashed instances, in the order they were taken off
    pub fn stashed(&self) -> &[ArmorInstance] {
        &self.stash
    }

    fn stashed_count(&self, key: &str) -> usize {
        self.stash.iter().filter(|a| a.item_key == key).count()
    }
}
