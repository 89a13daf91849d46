use super::{Archetype, Vitality};
use crate::combat::apply_damage;
use crate::error::SetupError;

/// Health state machine of the enemy.
///
/// ```text
///            take_damage (stamina -> 0)
///   Alive ─────────────────────────────▶ Defeated ──┐
///     ▲                                     │       │ take_damage
///     └──────────────── reset ──────────────┘ ◀─────┘ (stays at 0)
/// ```
///
/// Stamina never goes below zero and only [`EnemyState::reset`] leaves the
/// defeated state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    archetype: Archetype,
    strength: u32,
    stamina: u32,
    initial_stamina: u32,
}

impl EnemyState {
    pub fn new(archetype: Archetype, strength: u32, stamina: u32) -> Result<Self, SetupError> {
        if strength == 0 {
            return Err(SetupError::ZeroStrength { side: "enemy" });
        }
        if stamina == 0 {
            return Err(SetupError::ZeroStamina { side: "enemy" });
        }
        Ok(Self {
            archetype,
            strength,
            stamina,
            initial_stamina: stamina,
        })
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
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

    /// Apply incoming damage and report whether the enemy still stands.
    pub fn take_damage(&mut self, damage: u32) -> Vitality {
        self.stamina = apply_damage(self.stamina, damage);
        self.vitality()
    }

    pub fn reset(&mut self) {
        self.stamina = self.initial_stamina;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goblin() -> EnemyState {
        EnemyState::new(Archetype::Goblin, 2, 12).unwrap()
    }

    #[test]
    fn survives_partial_damage() {
        let mut enemy = goblin();
        assert_eq!(enemy.take_damage(10), Vitality::Alive);
        assert_eq!(enemy.stamina(), 2);
    }

    #[test]
    fn overkill_clamps_and_defeats() {
        let mut enemy = EnemyState::new(Archetype::Ork, 2, 3).unwrap();
        assert_eq!(enemy.take_damage(5), Vitality::Defeated);
        assert_eq!(enemy.stamina(), 0);
    }

    #[test]
    fn exact_damage_defeats() {
        let mut enemy = goblin();
        assert_eq!(enemy.take_damage(12), Vitality::Defeated);
    }

    #[test]
    fn defeated_stays_defeated_until_reset() {
        let mut enemy = goblin();
        enemy.take_damage(20);
        assert_eq!(enemy.take_damage(0), Vitality::Defeated);
        assert_eq!(enemy.take_damage(3), Vitality::Defeated);
        assert_eq!(enemy.stamina(), 0);

        enemy.reset();
        assert_eq!(enemy.vitality(), Vitality::Alive);
        assert_eq!(enemy.stamina(), enemy.initial_stamina());
    }

    #[test]
    fn reset_keeps_identity() {
        let mut enemy = goblin();
        enemy.take_damage(4);
        enemy.reset();
        assert_eq!(enemy.archetype(), Archetype::Goblin);
        assert_eq!(enemy.strength(), 2);
        assert_eq!(enemy.stamina(), 12);
    }
}
