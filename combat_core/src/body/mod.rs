//! BodyModel - Per-part health bookkeeping
//!
//! Aggregate health is never stored; it is derived from the part sums
//! every time [`BodyModel::aggregate_health_percent`] is called.

pub mod recovery;

pub use recovery::{rest, RestOutcome, HEAL_PER_HOUR};

use crate::types::BodyPart;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Max health given to every part of a fresh character
pub const DEFAULT_PART_HEALTH: u32 = 50;

/// Health pool of a single body part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PartRecord")]
pub struct PartHealth {
    #[serde(rename = "health")]
    pub current: u32,
    #[serde(rename = "max_health")]
    pub max: u32,
}

/// Persisted form of one part; missing max is the default, missing health is full
#[derive(Deserialize)]
struct PartRecord {
    #[serde(default)]
    health: Option<u32>,
    #[serde(default)]
    max_health: Option<u32>,
}

impl From<PartRecord> for PartHealth {
    fn from(record: PartRecord) -> Self {
        let max = record.max_health.unwrap_or(DEFAULT_PART_HEALTH);
        PartHealth {
            current: record.health.unwrap_or(max).min(max),
            max,
        }
    }
}

impl PartHealth {
    /// A part at full health
    pub fn full(max: u32) -> Self {
        PartHealth { current: max, max }
    }

    /// Health still missing from this part
    pub fn missing(&self) -> u32 {
        self.max - self.current
    }

    pub fn is_damaged(&self) -> bool {
        self.current < self.max
    }

    pub fn is_destroyed(&self) -> bool {
        self.current == 0
    }
}

/// Health of all eleven body parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BodyRecord", into = "BodyRecord")]
pub struct BodyModel {
    parts: [PartHealth; BodyPart::COUNT],
}

/// Persisted form: part name to health, missing parts restored at full health
type BodyRecord = BTreeMap<BodyPart, PartHealth>;

impl Default for BodyModel {
    fn default() -> Self {
        BodyModel::new(DEFAULT_PART_HEALTH)
    }
}

impl From<BodyRecord> for BodyModel {
    fn from(record: BodyRecord) -> Self {
        let mut body = BodyModel::default();
        for (part, health) in record {
            body.parts[part as usize] = health;
        }
        body
    }
}

impl From<BodyModel> for BodyRecord {
    fn from(body: BodyModel) -> Self {
        body.parts().collect()
    }
}

impl BodyModel {
    /// Create a body with every part at `max_health`
    pub fn new(max_health: u32) -> Self {
        BodyModel {
            parts: [PartHealth::full(max_health); BodyPart::COUNT],
        }
    }

    /// Health of a single part
    pub fn part(&self, part: BodyPart) -> PartHealth {
        self.parts[part as usize]
    }

    /// All parts in canonical order
    pub fn parts(&self) -> impl Iterator<Item = (BodyPart, PartHealth)> + '_ {
        BodyPart::all().iter().map(move |&part| (part, self.part(part)))
    }

    /// Parts below max health, in canonical order
    pub fn damaged_parts(&self) -> Vec<BodyPart> {
        self.parts()
            .filter(|(_, health)| health.is_damaged())
            .map(|(part, _)| part)
            .collect()
    }

    pub fn is_destroyed(&self, part: BodyPart) -> bool {
        self.part(part).is_destroyed()
    }

    /// Remove health from a part, clamping at zero
    ///
    /// Returns the health actually removed.
    pub fn apply_damage(&mut self, part: BodyPart, amount: u32) -> u32 {
        let health = &mut self.parts[part as usize];
        let removed = amount.min(health.current);
        health.current -= removed;
        removed
    }

    /// Restore health to a part, capped at its max
    ///
    /// Returns the health actually restored.
    pub fn heal_part(&mut self, part: BodyPart, amount: u32) -> u32 {
        let health = &mut self.parts[part as usize];
        let restored = amount.min(health.missing());
        health.current += restored;
        restored
    }

    /// Restore the same amount to every part
    pub fn heal_all(&mut self, amount: u32) -> u32 {
        BodyPart::all()
            .iter()
            .map(|&part| self.heal_part(part, amount))
            .sum()
    }

    /// Spread healing across damaged parts only
    ///
    /// The total is split evenly; the first `total % damaged` parts get one
    /// extra point. Each share is capped at the part's missing health and any
    /// excess is discarded rather than moved to another part.
    pub fn distribute_heal(&mut self, total: u32) -> u32 {
        let damaged = self.damaged_parts();
        if damaged.is_empty() {
            return 0;
        }

        let count = damaged.len() as u32;
        let per_part = total / count;
        let remainder = total % count;

        damaged
            .into_iter()
            .enumerate()
            .map(|(idx, part)| {
                let share = per_part + u32::from((idx as u32) < remainder);
                self.heal_part(part, share)
            })
            .sum()
    }

    /// Sum of current health over all parts
    pub fn total_health(&self) -> u32 {
        self.parts.iter().map(|p| p.current).sum()
    }

    /// Sum of max health over all parts
    pub fn total_max_health(&self) -> u32 {
        self.parts.iter().map(|p| p.max).sum()
    }

    /// `round(100 × Σcurrent / Σmax)`, clamped to [0, 100]
    pub fn aggregate_health_percent(&self) -> u32 {
        let total = u64::from(self.total_health());
        let max = u64::from(self.total_max_health());
        if max == 0 {
            return 0;
        }
        // Integer round-half-up of 100 * total / max
        let percent = (200 * total + max) / (2 * max);
        percent.min(100) as u32
    }

    /// Whether aggregate health has reached zero
    pub fn is_defeated(&self) -> bool {
        self.aggregate_health_percent() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fresh_body_is_full() {
        let body = BodyModel::default();
        assert_eq!(body.aggregate_health_percent(), 100);
        assert_eq!(body.total_max_health(), 550);
        assert!(body.damaged_parts().is_empty());
    }

    #[test]
    fn test_torso_hit_aggregate() {
        let mut body = BodyModel::default();
        assert_eq!(body.apply_damage(BodyPart::Torso, 10), 10);

        assert_eq!(body.part(BodyPart::Torso), PartHealth { current: 40, max: 50 });
        // round(100 * 540 / 550) = round(98.18)
        assert_eq!(body.aggregate_health_percent(), 98);
    }

    #[test]
    fn test_over_damage_clamps() {
        let mut body = BodyModel::default();
        assert_eq!(body.apply_damage(BodyPart::Nose, 80), 50);
        assert_eq!(body.apply_damage(BodyPart::Nose, 5), 0);
        assert!(body.is_destroyed(BodyPart::Nose));
    }

    #[test]
    fn test_heal_part_caps_at_max() {
        let mut body = BodyModel::default();
        body.apply_damage(BodyPart::Head, 10);
        assert_eq!(body.heal_part(BodyPart::Head, 25), 10);
        assert_eq!(body.part(BodyPart::Head).current, 50);
    }

    #[test]
    fn test_distribute_heal_remainder_goes_first() {
        let mut body = BodyModel::default();
        body.apply_damage(BodyPart::LeftEye, 20);
        body.apply_damage(BodyPart::Torso, 20);
        body.apply_damage(BodyPart::LeftLeg, 20);

        // 10 / 3 = 3 each, remainder 1 to the first damaged part
        assert_eq!(body.distribute_heal(10), 10);
        assert_eq!(body.part(BodyPart::LeftEye).current, 34);
        assert_eq!(body.part(BodyPart::Torso).current, 33);
        assert_eq!(body.part(BodyPart::LeftLeg).current, 33);
    }

    #[test]
    fn test_distribute_heal_discards_excess() {
        let mut body = BodyModel::default();
        body.apply_damage(BodyPart::Mouth, 2);
        body.apply_damage(BodyPart::Stomach, 30);

        // 40 / 2 = 20 each; Mouth only needs 2, the other 18 are lost
        assert_eq!(body.distribute_heal(40), 22);
        assert_eq!(body.part(BodyPart::Mouth).current, 50);
        assert_eq!(body.part(BodyPart::Stomach).current, 40);
        assert_eq!(body.part(BodyPart::Head).current, 50);
    }

    #[test]
    fn test_distribute_heal_nothing_damaged() {
        let mut body = BodyModel::default();
        assert_eq!(body.distribute_heal(40), 0);
        assert_eq!(body.aggregate_health_percent(), 100);
    }

    #[test]
    fn test_defeated_only_when_everything_is_gone() {
        let mut body = BodyModel::default();
        for part in BodyPart::all() {
            body.apply_damage(*part, 50);
        }
        assert!(body.is_defeated());
        body.heal_part(BodyPart::Head, 1);
        // round(100 * 1 / 550) = 0
        assert!(body.is_defeated());
        body.heal_part(BodyPart::Head, 2);
        assert!(!body.is_defeated());
    }

    #[test]
    fn test_restore_fills_missing_parts() {
        let json = r#"{"torso":{"health":12,"max_health":50},"head":{"health":90,"max_health":50}}"#;
        let body: BodyModel = serde_json::from_str(json).unwrap();

        assert_eq!(body.part(BodyPart::Torso).current, 12);
        assert_eq!(body.part(BodyPart::Head).current, 50);
        assert_eq!(body.part(BodyPart::LeftLeg), PartHealth::full(DEFAULT_PART_HEALTH));
    }

    #[test]
    fn test_serde_round_trip() {
        let mut body = BodyModel::default();
        body.apply_damage(BodyPart::RightArm, 17);
        body.apply_damage(BodyPart::LeftEye, 50);

        let json = serde_json::to_string(&body).unwrap();
        let restored: BodyModel = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, body);
        assert_eq!(restored.aggregate_health_percent(), body.aggregate_health_percent());
    }

    #[derive(Debug, Clone)]
    enum BodyOp {
        Damage(usize, u32),
        Heal(usize, u32),
        Distribute(u32),
        HealAll(u32),
    }

    fn body_op() -> impl Strategy<Value = BodyOp> {
        prop_oneof![
            (0..BodyPart::COUNT, 0u32..120).prop_map(|(p, a)| BodyOp::Damage(p, a)),
            (0..BodyPart::COUNT, 0u32..120).prop_map(|(p, a)| BodyOp::Heal(p, a)),
            (0u32..200).prop_map(BodyOp::Distribute),
            (0u32..20).prop_map(BodyOp::HealAll),
        ]
    }

    proptest! {
        #[test]
        fn prop_health_stays_in_bounds(ops in proptest::collection::vec(body_op(), 0..60)) {
            let mut body = BodyModel::default();
            for op in ops {
                match op {
                    BodyOp::Damage(p, a) => { body.apply_damage(BodyPart::ALL[p], a); }
                    BodyOp::Heal(p, a) => { body.heal_part(BodyPart::ALL[p], a); }
                    BodyOp::Distribute(a) => { body.distribute_heal(a); }
                    BodyOp::HealAll(a) => { body.heal_all(a); }
                }
                for (_, health) in body.parts() {
                    prop_assert!(health.current <= health.max);
                }
                let aggregate = body.aggregate_health_percent();
                prop_assert!(aggregate <= 100);
                prop_assert_eq!(aggregate, body.aggregate_health_percent());
            }
        }

        #[test]
        fn prop_distribute_heal_never_exceeds_total(damage in proptest::collection::vec(0u32..60, BodyPart::COUNT), total in 0u32..300) {
            let mut body = BodyModel::default();
            for (idx, amount) in damage.iter().enumerate() {
                body.apply_damage(BodyPart::ALL[idx], *amount);
            }
            let undamaged: Vec<_> = body.parts().filter(|(_, h)| !h.is_damaged()).map(|(p, _)| p).collect();
            let before = body.total_health();
            let healed = body.distribute_heal(total);
            prop_assert!(healed <= total);
            prop_assert_eq!(body.total_health(), before + healed);
            for part in undamaged {
                prop_assert_eq!(body.part(part).current, body.part(part).max);
            }
        }
    }
}
