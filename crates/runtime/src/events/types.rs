//! Event types for different topics.

use game_core::{BattlePhase, Combatant, Outcome};
use serde::{Deserialize, Serialize};

/// Events emitted by the battle controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A round was fully resolved, including the enemy's delayed answer
    RoundResolved {
        round: u32,
        first: Combatant,
        player_damage: u32,
        enemy_damage: u32,
        phase: BattlePhase,
    },

    /// The round just resolved decided the battle
    Finished { round: u32, outcome: Outcome },

    /// Counters, player stamina and enemy were restored
    Reset,
}

/// Events emitted by the enemy worker (lightweight)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyEvent {
    /// Damage was applied; `alive` is what the pending strike will report
    Damaged {
        damage: u32,
        stamina: u32,
        alive: bool,
    },

    Reset { stamina: u32 },
}
