//! ProgressionTracker - XP accumulation and level-ups

use crate::config::ProgressionConstants;
use serde::{Deserialize, Serialize};

/// XP and level of a character
///
/// After every award `xp < threshold(level)` holds; leftover XP carries over
/// into the next level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProgressionRecord")]
pub struct ProgressionTracker {
    xp: u32,
    level: u32,
    #[serde(skip)]
    constants: ProgressionConstants,
}

#[derive(Deserialize)]
struct ProgressionRecord {
    #[serde(default)]
    xp: u32,
    #[serde(default = "first_level")]
    level: u32,
}

fn first_level() -> u32 {
    1
}

impl From<ProgressionRecord> for ProgressionTracker {
    fn from(record: ProgressionRecord) -> Self {
        let mut tracker = ProgressionTracker {
            xp: record.xp,
            level: record.level.max(1),
            constants: ProgressionConstants::default(),
        };
        tracker.normalize();
        tracker
    }
}

impl Default for ProgressionTracker {
    fn default() -> Self {
        Self::new(ProgressionConstants::default())
    }
}

impl ProgressionTracker {
    /// Level 1 with no XP
    pub fn new(constants: ProgressionConstants) -> Self {
        ProgressionTracker {
            xp: 0,
            level: 1,
            constants,
        }
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Swap the threshold curve, re-normalizing the stored XP
    pub fn set_constants(&mut self, constants: ProgressionConstants) -> u32 {
        self.constants = constants;
        self.normalize()
    }

    /// XP needed to advance from `level`: `base + (level - 1) × step`
    pub fn threshold_for(&self, level: u32) -> u32 {
        self.constants
            .base_threshold
            .saturating_add(level.saturating_sub(1).saturating_mul(self.constants.threshold_step))
    }

    /// XP needed to advance from the current level
    pub fn threshold(&self) -> u32 {
        self.threshold_for(self.level)
    }

    /// Add XP and resolve any number of level-ups
    ///
    /// Returns how many levels were gained.
    pub fn award_xp(&mut self, amount: u32) -> u32 {
        self.xp = self.xp.saturating_add(amount);
        let gained = self.normalize();
        if gained > 0 {
            tracing::info!("Reached level {} (+{} levels)", self.level, gained);
        }
        gained
    }

    /// `(xp, threshold)` toward the next level
    pub fn progress(&self) -> (u32, u32) {
        (self.xp, self.threshold())
    }

    /// "xp/threshold" display string
    pub fn progress_label(&self) -> String {
        format!("{}/{}", self.xp, self.threshold())
    }

    fn normalize(&mut self) -> u32 {
        let mut gained = 0;
        loop {
            let threshold = self.threshold();
            // A zero threshold would level forever
            if threshold == 0 || self.xp < threshold {
                break;
            }
            self.xp -= threshold;
            self.level += 1;
            gained += 1;
        }
        gained
    }
}
