//! Runtime orchestration for the duel.
//!
//! This crate wires the pure rules from `game-core` to an asynchronous enemy
//! actor, a round-resolving controller and a topic-based event bus. Consumers
//! embed [`Runtime`] to play rounds, reset the battle and read a
//! [`BattleView`] for display.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`battle`] resolves rounds against any [`EnemyUnit`]
//! - [`events`] provides the topic-based event bus
//! - [`providers`] supplies OS-backed randomness
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod battle;
pub mod events;
pub mod providers;
pub mod runtime;

mod workers;

pub use api::{
    BattleView, EnemyHandle, EnemyUnit, EnemyView, Result, RoundReport, RoundSummary,
    RuntimeError,
};
pub use battle::BattleController;
pub use events::{BattleEvent, EnemyEvent, Event, EventBus, Topic};
pub use providers::ThreadRandom;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
