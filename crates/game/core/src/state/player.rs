use super::Vitality;
use crate::combat::apply_damage;
use crate::error::SetupError;

/// The player's side of the duel.
///
/// Strength is fixed at creation. Stamina only moves down during a battle and
/// is restored by [`PlayerState::restore`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    strength: u32,
    stamina: u32,
    initial_stamina: u32,
}

impl PlayerState {
    pub fn new(strength: u32, stamina: u32) -> Result<Self, SetupError> {
        if strength == 0 {
            return Err(SetupError::ZeroStrength { side: "player" });
        }
        if stamina == 0 {
            return Err(SetupError::ZeroStamina { side: "player" });
        }
        Ok(Self {
            strength,
            stamina,
            initial_stamina: stamina,
        })
    }

    pub fn strength(&self) -> u32 {
        self.strength
    }

    pub fn stamina(&self) -> u32 {
        self.stamina
    }

    pub fn initial_stamina(&self) -> u32 {
        self.initial_stamina
    }

    pub fn vitality(&self) -> Vitality {
        Vitality::from_stamina(self.stamina)
    }

    /// Take an enemy hit. A hit at least as large as the remaining stamina
    /// drops it to exactly zero and defeats the player.
    pub fn receive_hit(&mut self, damage: u32) -> Vitality {
        self.stamina = apply_damage(self.stamina, damage);
        self.vitality()
    }

    /// Refill stamina to its starting value.
    pub fn restore(&mut self) {
        self.stamina = self.initial_stamina;
    }
}
