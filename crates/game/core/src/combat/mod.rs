//! Combat resolution primitives.
//!
//! Pure functions for turning a die roll into damage and applying damage to a
//! stamina pool. All functions are side-effect free; the engine and the state
//! types call into them.
//!
//! # Core Functions
//!
//! - `compute_damage`: d6 roll scaled by strength
//! - `apply_damage`: stamina reduction (clamped to 0)

pub mod damage;

pub use damage::{apply_damage, compute_damage};
