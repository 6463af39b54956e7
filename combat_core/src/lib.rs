//! combat_core - Combat resolution and anatomical damage engine
//!
//! This library provides:
//! - BodyModel: Per-part health for eleven body parts and derived aggregate health
//! - ArmorRegistry: Slot-based armor that absorbs damage out of its durability
//! - DamageResolver: Weapon/enemy damage rolls and single-hit resolution
//! - CombatResolver: One player attack and the enemy's counter-hit
//! - RetaliationScheduler: Ambient enemy aggression between player actions
//! - ProgressionTracker: XP and level-ups

pub mod armor;
pub mod body;
pub mod character;
pub mod combat;
pub mod config;
pub mod damage;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod types;
pub mod world;

// Re-export core types for convenience
pub use armor::{AbsorbResult, ArmorInstance, ArmorRegistry, ArmorStatus};
pub use body::{BodyModel, PartHealth, RestOutcome};
pub use character::{ArmorChange, Character, EquippedWeapon, Inventory, Loadout};
pub use combat::{
    CombatResolver, EnemyReport, ExchangeOutcome, ExchangeResult, PlayerAction, RetaliationHit, RetaliationReport,
    RetaliationScheduler,
};
pub use config::{CombatConstants, ConfigError, EnemyCatalog, ItemCatalog};
pub use damage::{DamageEffect, DamageResolver, HitResult};
pub use engine::CombatEngine;
pub use error::CombatError;
pub use progression::ProgressionTracker;
pub use rng::{CombatRng, RandSource, ScriptedRng};
pub use snapshot::CharacterSnapshot;
pub use types::{ArmorSlot, BodyPart};
pub use world::{Enemy, LocationRepository, Locations};
