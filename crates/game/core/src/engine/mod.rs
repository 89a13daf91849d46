//! Round planning and narration.
//!
//! The engine decides everything about a round that does not depend on the
//! enemy's reaction: both damage rolls and who strikes first. Applying the
//! plan is left to the caller, because the enemy answers asynchronously.
//! [`RoundLog`] narrates whatever the caller ends up applying.

mod log;
mod round;

pub use log::{DEFEAT_TEXT, RoundLog, VICTORY_TEXT};
pub use round::{Combatant, RoundPlan};
