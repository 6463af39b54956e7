//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::types::{ArmorSlot, BodyPart};
pub use crate::character::{Character, EquippedWeapon, Inventory};

// Body and armor
pub use crate::body::{BodyModel, PartHealth};
pub use crate::armor::{ArmorInstance, ArmorRegistry};

// Damage system
pub use crate::damage::{DamageEffect, DamageResolver, HitResult};

// Combat
pub use crate::combat::{CombatResolver, ExchangeOutcome, ExchangeResult, PlayerAction, RetaliationReport, RetaliationScheduler};
pub use crate::engine::CombatEngine;
pub use crate::error::CombatError;

// World
pub use crate::world::{Enemy, LocationRepository, Locations};

// Randomness
pub use crate::rng::{CombatRng, RandSource};

// Config
pub use crate::config::{CombatConstants, EnemyCatalog, ItemCatalog};
