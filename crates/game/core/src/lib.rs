//! Deterministic duel rules shared by the runtime and clients.
//!
//! `game-core` defines the canonical rules of a single duel: damage rolls,
//! player and enemy stamina, the battle phase machine and the round log. It
//! exposes pure, synchronous APIs; the runtime crate layers the asynchronous
//! enemy actor and round orchestration on top.
pub mod combat;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;
pub mod state;

pub use combat::{apply_damage, compute_damage};
pub use config::GameConfig;
pub use engine::{Combatant, DEFEAT_TEXT, RoundLog, RoundPlan, VICTORY_TEXT};
pub use error::SetupError;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use state::{
    Archetype, BattlePhase, BattleState, EnemyState, INITIAL_PROMPT, Outcome, PlayerState,
    RESET_PROMPT, Vitality,
};
