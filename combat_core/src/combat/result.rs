//! Combat outcomes - Records of an attack exchange and an ambient pass

use crate::damage::HitResult;
use serde::{Deserialize, Serialize};

/// Result of one player attack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeOutcome {
    /// Name of the enemy attacked
    pub enemy_name: String,
    /// 1-based ordinal of the enemy among those sharing its name
    pub ordinal: usize,
    /// Damage the player dealt
    pub player_damage: u32,
    /// Enemy health after the strike; zero or below when defeated
    pub enemy_health: i32,
    pub result: ExchangeResult,
}

/// How the exchange ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExchangeResult {
    /// The enemy died and was removed; it did not strike back
    EnemyDefeated {
        xp_awarded: u32,
        levels_gained: u32,
        /// Level after the award
        level: u32,
        /// Item keys the enemy carried
        drops: Vec<String>,
    },
    /// The enemy survived and hit back once
    EnemyRetaliated { hit: HitResult, player_defeated: bool },
}

impl ExchangeOutcome {
    pub fn enemy_defeated(&self) -> bool {
        matches!(self.result, ExchangeResult::EnemyDefeated { .. })
    }

    pub fn player_defeated(&self) -> bool {
        matches!(self.result, ExchangeResult::EnemyRetaliated { player_defeated: true, .. })
    }

    /// The counter-hit, if the enemy survived
    pub fn retaliation(&self) -> Option<&HitResult> {
        match &self.result {
            ExchangeResult::EnemyRetaliated { hit, .. } => Some(hit),
            ExchangeResult::EnemyDefeated { .. } => None,
        }
    }

    /// Plain multi-line description of the exchange
    pub fn summary(&self) -> String {
        let mut lines = vec![format!(
            "You attack the {} ({}) for {} damage.",
            self.enemy_name, self.ordinal, self.player_damage
        )];

        match &self.result {
            ExchangeResult::EnemyDefeated {
                xp_awarded,
                levels_gained,
                level,
                ..
            } => {
                lines.push(format!("You have defeated the {} ({})!", self.enemy_name, self.ordinal));
                lines.push(format!("You gain {} XP.", xp_awarded));
                if *levels_gained > 0 {
                    lines.push(format!("You reached level {}!", level));
                }
            }
            ExchangeResult::EnemyRetaliated { hit, player_defeated } => {
                lines.push(hit.summary(&self.enemy_name));
                if *player_defeated {
                    lines.push("You have been defeated!".to_string());
                }
            }
        }

        lines.join("\n")
    }
}

/// One unprovoked hit during an ambient pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetaliationHit {
    pub enemy_name: String,
    pub hit: HitResult,
}

impl RetaliationHit {
    pub fn summary(&self) -> String {
        self.hit.summary(&self.enemy_name)
    }
}

/// Everything that happened during one ambient pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetaliationReport {
    /// Hits in the order the enemies struck
    pub hits: Vec<RetaliationHit>,
    /// Whether aggregate health was zero after the pass
    pub player_defeated: bool,
}

impl RetaliationReport {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// One line per hit, plus a defeat line; empty when nothing attacked
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self.hits.iter().map(RetaliationHit::summary).collect();
        if !lines.is_empty() && self.player_defeated {
            lines.push("You have been defeated!".to_string());
        }
        lines.join("\n")
    }
}
