//! DamageEffect - The attack value carried by weapons and enemies
//!
//! Templates may declare an attack as a single number or as a
//! `{ min, max }` table. The shape is checked once, while the template is
//! deserialized; anything unrecognised becomes [`DamageEffect::Unset`] and
//! rolls the fallback damage instead of failing the load.

use crate::rng::CombatRng;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Damage dealt when an effect is unset or malformed
pub const FALLBACK_DAMAGE: u32 = 1;

/// How much damage an attack deals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawDamageSpec")]
pub enum DamageEffect {
    /// Always deals exactly this much
    Fixed(u32),
    /// Uniform roll in `[min, max]`
    Range { min: u32, max: u32 },
    /// Missing or malformed attack value
    #[default]
    Unset,
}

/// Shape accepted from configuration, before validation
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDamageSpec {
    Fixed(i64),
    Range { min: i64, max: i64 },
    Malformed(serde::de::IgnoredAny),
}

impl From<RawDamageSpec> for DamageEffect {
    fn from(raw: RawDamageSpec) -> Self {
        match raw {
            RawDamageSpec::Fixed(value) => match u32::try_from(value) {
                Ok(value) => DamageEffect::Fixed(value),
                Err(_) => {
                    tracing::warn!("Malformed damage value {}, using fallback", value);
                    DamageEffect::Unset
                }
            },
            RawDamageSpec::Range { min, max } => match (u32::try_from(min), u32::try_from(max)) {
                (Ok(min), Ok(max)) if min <= max => DamageEffect::Range { min, max },
                _ => {
                    tracing::warn!("Malformed damage range {}..{}, using fallback", min, max);
                    DamageEffect::Unset
                }
            },
            RawDamageSpec::Malformed(_) => {
                tracing::warn!("Unrecognised damage shape, using fallback");
                DamageEffect::Unset
            }
        }
    }
}

impl Serialize for DamageEffect {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Range {
            min: u32,
            max: u32,
        }

        match *self {
            DamageEffect::Fixed(value) => serializer.serialize_u32(value),
            DamageEffect::Range { min, max } => Range { min, max }.serialize(serializer),
            DamageEffect::Unset => serializer.serialize_none(),
        }
    }
}

impl DamageEffect {
    /// Roll damage for this effect
    pub fn roll(&self, rng: &mut impl CombatRng) -> u32 {
        match *self {
            DamageEffect::Fixed(value) => value,
            DamageEffect::Range { min, max } => rng.next_int(min, max),
            DamageEffect::Unset => FALLBACK_DAMAGE,
        }
    }
}

impl fmt::Display for DamageEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            DamageEffect::Fixed(value) => write!(f, "{}", value),
            DamageEffect::Range { min, max } => write!(f, "{}-{}", min, max),
            DamageEffect::Unset => write!(f, "{}", FALLBACK_DAMAGE),
        }
    }
}
