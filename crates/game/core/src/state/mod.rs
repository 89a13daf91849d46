//! Authoritative duel state.
//!
//! This module owns the player, the enemy and the battle aggregate. Runtime
//! layers read these types through accessors and mutate them exclusively
//! through the operations defined here.
mod archetype;
mod battle;
mod enemy;
mod player;

pub use archetype::Archetype;
pub use battle::{BattlePhase, BattleState, INITIAL_PROMPT, Outcome, RESET_PROMPT};
pub use enemy::EnemyState;
pub use player::PlayerState;

/// Whether a combatant can still fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Vitality {
    /// Stamina above zero.
    Alive,
    /// Stamina exhausted.
    Defeated,
}

impl Vitality {
    pub fn from_stamina(stamina: u32) -> Self {
        if stamina > 0 {
            Self::Alive
        } else {
            Self::Defeated
        }
    }

    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}
