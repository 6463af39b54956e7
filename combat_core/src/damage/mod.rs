//! Damage system - Damage effects, rolls and hit resolution

mod effect;
mod hit;
mod resolver;

pub use effect::{DamageEffect, FALLBACK_DAMAGE};
pub use hit::HitResult;
pub use resolver::DamageResolver;
