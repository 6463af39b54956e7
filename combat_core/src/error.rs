//! Recoverable combat and equipment errors

use crate::types::ArmorSlot;
use thiserror::Error;

/// Error raised by a combat or equipment operation
///
/// None of these are fatal: the caller reports the message and the turn
/// otherwise proceeds unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Attack what?")]
    MissingTarget,
    #[error("There is no '{0}' here to attack.")]
    NoSuchTarget(String),
    #[error("Invalid armor slot: {0}")]
    InvalidSlot(String),
    #[error("You are not wearing anything in the {0} slot.")]
    EmptySlot(ArmorSlot),
    #[error("The {0} is broken and cannot be worn.")]
    BrokenArmor(String),
    #[error("{0} is not armor.")]
    NotArmor(String),
    #[error("{0} is not a weapon.")]
    NotWeapon(String),
    #[error("You don't have any {0}.")]
    NotInInventory(String),
    #[error("You can't drink the {0}.")]
    NotDrinkable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CombatError::MissingTarget.to_string(), "Attack what?");
        assert_eq!(
            CombatError::NoSuchTarget("troll".to_string()).to_string(),
            "There is no 'troll' here to attack."
        );
        assert_eq!(
            CombatError::EmptySlot(ArmorSlot::Legs).to_string(),
            "You are not wearing anything in the leggings slot."
        );
    }
}
