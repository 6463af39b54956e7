//! Tunable combat constants

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Numbers that drive damage, aggression and progression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Lowest unarmed strike
    #[serde(default = "default_unarmed_min")]
    pub unarmed_min: u32,
    /// Highest unarmed strike
    #[serde(default = "default_unarmed_max")]
    pub unarmed_max: u32,
    /// XP for defeating any enemy
    #[serde(default = "default_kill_xp")]
    pub kill_xp: u32,
    /// Chance per enemy per turn of an unprovoked attack
    #[serde(default = "default_aggression_chance")]
    pub aggression_chance: f64,
    /// Max health of each body part on a new character
    #[serde(default = "default_part_max_health")]
    pub part_max_health: u32,
    #[serde(default)]
    pub progression: ProgressionConstants,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            unarmed_min: default_unarmed_min(),
            unarmed_max: default_unarmed_max(),
            kill_xp: default_kill_xp(),
            aggression_chance: default_aggression_chance(),
            part_max_health: default_part_max_health(),
            progression: ProgressionConstants::default(),
        }
    }
}

fn default_unarmed_min() -> u32 {
    1
}
fn default_unarmed_max() -> u32 {
    2
}
fn default_kill_xp() -> u32 {
    25
}
fn default_aggression_chance() -> f64 {
    0.4
}
fn default_part_max_health() -> u32 {
    crate::body::DEFAULT_PART_HEALTH
}

/// Level threshold: `base_threshold + (level - 1) × threshold_step`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionConstants {
    #[serde(default = "default_base_threshold")]
    pub base_threshold: u32,
    #[serde(default = "default_threshold_step")]
    pub threshold_step: u32,
}

impl Default for ProgressionConstants {
    fn default() -> Self {
        ProgressionConstants {
            base_threshold: default_base_threshold(),
            threshold_step: default_threshold_step(),
        }
    }
}

fn default_base_threshold() -> u32 {
    100
}
fn default_threshold_step() -> u32 {
    25
}

impl CombatConstants {
    /// Parse and validate constants from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::parse_toml(content)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Load and validate constants from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: CombatConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    /// Bundled defaults from `config/combat.toml`
    pub fn bundled() -> Self {
        Self::from_toml(include_str!("../../config/combat.toml")).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.aggression_chance) {
            return Err(ConfigError::ValidationError(format!(
                "aggression_chance must be within [0, 1], got {}",
                self.aggression_chance
            )));
        }
        if self.unarmed_min > self.unarmed_max {
            return Err(ConfigError::ValidationError(format!(
                "unarmed_min ({}) exceeds unarmed_max ({})",
                self.unarmed_min, self.unarmed_max
            )));
        }
        if self.progression.base_threshold == 0 {
            return Err(ConfigError::ValidationError(
                "progression.base_threshold must be positive".to_string(),
            ));
        }
        if self.part_max_health == 0 {
            return Err(ConfigError::ValidationError(
                "part_max_health must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
