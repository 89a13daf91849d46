//! Worker tasks that back the runtime orchestration.
//!
//! The enemy worker owns the authoritative [`game_core::EnemyState`] and
//! serves commands from [`crate::EnemyHandle`].

mod enemy;

pub use enemy::{Command, EnemyWorker};
