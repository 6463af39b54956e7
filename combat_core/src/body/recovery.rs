//! Rest recovery - Healing applied when the character sleeps

use super::BodyModel;
use crate::rng::CombatRng;
use serde::{Deserialize, Serialize};

/// Flat heal per part for every full hour rested
pub const HEAL_PER_HOUR: u32 = 2;

/// Health restored by a rest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestOutcome {
    /// Health from the per-hour heal of every part
    pub flat_healed: u32,
    /// Health from the per-minute heal of random damaged parts
    pub trickle_healed: u32,
}

impl RestOutcome {
    pub fn total(&self) -> u32 {
        self.flat_healed + self.trickle_healed
    }
}

/// Rest for `hours` and `minutes`
///
/// 1. Every part heals `HEAL_PER_HOUR × hours`
/// 2. For each minute of the whole rest, one uniformly chosen damaged part
///    heals by 1; stops as soon as nothing is damaged
///
/// All state changes complete before returning.
pub fn rest(body: &mut BodyModel, hours: u32, minutes: u32, rng: &mut impl CombatRng) -> RestOutcome {
    let mut outcome = RestOutcome {
        flat_healed: body.heal_all(hours.saturating_mul(HEAL_PER_HOUR)),
        ..RestOutcome::default()
    };

    let total_minutes = hours.saturating_mul(60).saturating_add(minutes);
    for _ in 0..total_minutes {
        let damaged = body.damaged_parts();
        if damaged.is_empty() {
            break;
        }
        let part = damaged[rng.next_index(damaged.len())];
        outcome.trickle_healed += body.heal_part(part, 1);
    }

    tracing::debug!(
        "Rested {}h{:02}m: {} flat, {} trickle healing",
        hours,
        minutes,
        outcome.flat_healed,
        outcome.trickle_healed
    );
    outcome
}
