//! Combat resolution - Player attacks and enemy aggression

mod examine;
mod exchange;
mod result;
mod retaliation;
mod target;

pub use examine::{examine_enemy, EnemyReport};
pub use exchange::CombatResolver;
pub use result::{ExchangeOutcome, ExchangeResult, RetaliationHit, RetaliationReport};
pub use retaliation::{PlayerAction, RetaliationScheduler};
pub use target::{select_target, ResolvedTarget, TargetQuery};
