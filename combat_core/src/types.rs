//! Core types shared across the combat engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anatomical zone carrying its own health pool
///
/// Declaration order is the canonical iteration order used for healing
/// distribution and random hit selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    RightEye,
    LeftEye,
    Head,
    Nose,
    Mouth,
    RightArm,
    LeftArm,
    Torso,
    Stomach,
    RightLeg,
    LeftLeg,
}

impl BodyPart {
    /// Number of body parts on every character
    pub const COUNT: usize = 11;

    /// Every body part in canonical order
    pub const ALL: [BodyPart; BodyPart::COUNT] = [
        BodyPart::RightEye,
        BodyPart::LeftEye,
        BodyPart::Head,
        BodyPart::Nose,
        BodyPart::Mouth,
        BodyPart::RightArm,
        BodyPart::LeftArm,
        BodyPart::Torso,
        BodyPart::Stomach,
        BodyPart::RightLeg,
        BodyPart::LeftLeg,
    ];

    /// Get all body parts
    pub fn all() -> &'static [BodyPart] {
        &Self::ALL
    }

    /// Display name, e.g. "Right Eye"
    pub fn name(&self) -> &'static str {
        match self {
            BodyPart::RightEye => "Right Eye",
            BodyPart::LeftEye => "Left Eye",
            BodyPart::Head => "Head",
            BodyPart::Nose => "Nose",
            BodyPart::Mouth => "Mouth",
            BodyPart::RightArm => "Right Arm",
            BodyPart::LeftArm => "Left Arm",
            BodyPart::Torso => "Torso",
            BodyPart::Stomach => "Stomach",
            BodyPart::RightLeg => "Right Leg",
            BodyPart::LeftLeg => "Left Leg",
        }
    }

    /// Look up a part by display name or snake_case key (case-insensitive)
    pub fn from_name(name: &str) -> Option<BodyPart> {
        let wanted = name.trim().to_lowercase().replace('_', " ");
        Self::ALL
            .iter()
            .copied()
            .find(|part| part.name().to_lowercase() == wanted)
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Equipment location for a piece of armor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    #[serde(rename = "head_armor")]
    Head,
    #[serde(rename = "torso_armor")]
    Torso,
    #[serde(rename = "leggings")]
    Legs,
}

impl ArmorSlot {
    /// Get all armor slots
    pub fn all() -> &'static [ArmorSlot] {
        &[ArmorSlot::Head, ArmorSlot::Torso, ArmorSlot::Legs]
    }

    /// Key used by item templates to declare their slot
    pub fn key(&self) -> &'static str {
        match self {
            ArmorSlot::Head => "head_armor",
            ArmorSlot::Torso => "torso_armor",
            ArmorSlot::Legs => "leggings",
        }
    }

    /// Short label for status reports
    pub fn label(&self) -> &'static str {
        match self {
            ArmorSlot::Head => "Head",
            ArmorSlot::Torso => "Torso",
            ArmorSlot::Legs => "Legs",
        }
    }

    /// Parse a declared slot key; also accepts the short labels
    pub fn from_key(key: &str) -> Option<ArmorSlot> {
        match key.trim().to_lowercase().as_str() {
            "head_armor" | "head" => Some(ArmorSlot::Head),
            "torso_armor" | "torso" => Some(ArmorSlot::Torso),
            "leggings" | "legs" => Some(ArmorSlot::Legs),
            _ => None,
        }
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
