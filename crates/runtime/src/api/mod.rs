//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! other layers can stay focused on orchestration and workers.

pub mod errors;
pub mod handle;
pub mod unit;
pub mod view;

pub use errors::{Result, RuntimeError};
pub use handle::EnemyHandle;
pub use unit::EnemyUnit;
pub use view::{BattleView, EnemyView, RoundReport, RoundSummary};
