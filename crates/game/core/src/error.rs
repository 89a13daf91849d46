//! Errors raised while assembling a duel.
//!
//! Round resolution itself is total: every roll and stamina update is defined
//! for all inputs. The only way to fail is to build a combatant from values
//! that break the data model, which [`SetupError`] reports.

/// Invalid combatant parameters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// Strength scales every damage roll and must be at least 1.
    #[error("{side} strength must be positive")]
    ZeroStrength { side: &'static str },

    /// A combatant cannot enter a battle already exhausted.
    #[error("{side} starting stamina must be positive")]
    ZeroStamina { side: &'static str },
}
