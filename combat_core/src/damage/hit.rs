//! HitResult - Outcome of one hit landing on the character

use crate::types::BodyPart;
use serde::{Deserialize, Serialize};

/// What a single hit did to the character
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitResult {
    /// Part that was struck
    pub part: BodyPart,
    /// Damage rolled before armor
    pub raw_damage: u32,
    /// Damage soaked by armor
    pub absorbed: u32,
    /// `raw_damage - absorbed`, the damage sent to the body part
    pub actual_damage: u32,
    /// Whether the covering armor was destroyed
    pub armor_broke: bool,
    /// Display name of the destroyed armor
    pub broken_armor_name: Option<String>,
    /// Aggregate health after the hit
    pub aggregate_health: u32,
}

impl HitResult {
    /// Plain description of the hit from the character's side
    ///
    /// `attacker` is the name of whatever landed the hit.
    pub fn summary(&self, attacker: &str) -> String {
        let mut message = format!(
            "The {} attacks your {} for {} damage!",
            attacker, self.part, self.raw_damage
        );
        if self.absorbed > 0 {
            message.push_str(&format!(" Your armor absorbs {} damage.", self.absorbed));
            if let Some(name) = &self.broken_armor_name {
                message.push_str(&format!(" Your {} breaks!", name));
            }
        }
        if self.actual_damage > 0 {
            message.push_str(&format!(" You take {} damage.", self.actual_damage));
        }
        message
    }

    /// Whether this hit left the character at zero aggregate health
    pub fn is_fatal(&self) -> bool {
        self.aggregate_health == 0
    }
}
