//! Battle orchestration on top of the pure rules.

mod controller;

pub use controller::BattleController;
