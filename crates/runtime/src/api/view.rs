//! Read-only snapshots handed to display surfaces.
use serde::{Deserialize, Serialize};

use game_core::{Archetype, BattlePhase, Combatant, EnemyState, Outcome, Vitality};

/// Enemy as seen from outside its worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyView {
    pub archetype: Archetype,
    pub strength: u32,
    pub stamina: u32,
    pub initial_stamina: u32,
    pub vitality: Vitality,
}

impl From<&EnemyState> for EnemyView {
    fn from(state: &EnemyState) -> Self {
        Self {
            archetype: state.archetype(),
            strength: state.strength(),
            stamina: state.stamina(),
            initial_stamina: state.initial_stamina(),
            vitality: state.vitality(),
        }
    }
}

/// Everything a display surface renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleView {
    pub player_strength: u32,
    pub player_stamina: u32,
    pub player_initial_stamina: u32,
    pub round: u32,
    pub phase: BattlePhase,
    pub message: String,
    /// `None` when the enemy worker can no longer be reached.
    pub enemy: Option<EnemyView>,
}

impl BattleView {
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}

/// What happened in a resolved round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub first: Combatant,
    pub player_damage: u32,
    pub enemy_damage: u32,
    /// Set when this round decided the battle.
    pub outcome: Option<Outcome>,
    pub message: String,
}

/// Result of asking the controller to play a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundReport {
    Resolved(RoundSummary),
    /// The battle had already ended; nothing changed.
    BattleOver,
}

impl RoundReport {
    pub fn summary(&self) -> Option<&RoundSummary> {
        match self {
            Self::Resolved(summary) => Some(summary),
            Self::BattleOver => None,
        }
    }
}
