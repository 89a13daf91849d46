use crate::combat::compute_damage;
use crate::rng::RandomSource;

/// Side taking part in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Combatant {
    Player,
    Enemy,
}

/// Rolls for one round, drawn before any blow lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundPlan {
    pub round: u32,
    /// Who strikes first. Re-drawn every round.
    pub first: Combatant,
    pub player_damage: u32,
    pub enemy_damage: u32,
}

impl RoundPlan {
    /// Draw a round plan.
    ///
    /// Draw order is fixed: the player's d6, the enemy's d6, then the coin
    /// (heads means the player opens). Scripted sources rely on this order.
    pub fn roll(
        round: u32,
        rng: &mut (impl RandomSource + ?Sized),
        player_strength: u32,
        enemy_strength: u32,
    ) -> Self {
        let player_damage = compute_damage(rng.roll_d6(), player_strength);
        let enemy_damage = compute_damage(rng.roll_d6(), enemy_strength);
        let first = if rng.coin_flip() {
            Combatant::Player
        } else {
            Combatant::Enemy
        };

        Self {
            round,
            first,
            player_damage,
            enemy_damage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRandom;

    #[test]
    fn draws_player_then_enemy_then_coin() {
        let mut rng = ScriptedRandom::new().rolls([4, 6]).flips([false]);
        let plan = RoundPlan::roll(1, &mut rng, 3, 2);

        assert_eq!(plan.player_damage, 10);
        assert_eq!(plan.enemy_damage, 11);
        assert_eq!(plan.first, Combatant::Enemy);
    }

    #[test]
    fn turn_order_is_redrawn_each_round() {
        let mut rng = ScriptedRandom::new().flips([true, false, true]);
        let order: Vec<_> = (1..=3)
            .map(|round| RoundPlan::roll(round, &mut rng, 3, 2).first)
            .collect();

        assert_eq!(
            order,
            [Combatant::Player, Combatant::Enemy, Combatant::Player]
        );
    }
}
