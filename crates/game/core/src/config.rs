/// Duel configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Strength scaling the player's damage roll. Fixed for the session.
    pub player_strength: u32,
    /// Player stamina at session start and after every reset.
    pub player_stamina: u32,
    /// Strength scaling the enemy's damage roll.
    pub enemy_strength: u32,
    /// Enemy stamina at battle start and after every reset.
    pub enemy_stamina: u32,
    /// Strength assumed for the enemy when its unit cannot be queried.
    pub fallback_enemy_strength: u32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_STRENGTH: u32 = 3;
    pub const DEFAULT_PLAYER_STAMINA: u32 = 20;
    pub const DEFAULT_ENEMY_STRENGTH: u32 = 2;
    pub const DEFAULT_ENEMY_STAMINA: u32 = 12;
    pub const DEFAULT_FALLBACK_ENEMY_STRENGTH: u32 = 2;

    pub fn new() -> Self {
        Self {
            player_strength: Self::DEFAULT_PLAYER_STRENGTH,
            player_stamina: Self::DEFAULT_PLAYER_STAMINA,
            enemy_strength: Self::DEFAULT_ENEMY_STRENGTH,
            enemy_stamina: Self::DEFAULT_ENEMY_STAMINA,
            fallback_enemy_strength: Self::DEFAULT_FALLBACK_ENEMY_STRENGTH,
        }
    }

    pub fn with_player(mut self, strength: u32, stamina: u32) -> Self {
        self.player_strength = strength;
        self.player_stamina = stamina;
        self
    }

    pub fn with_enemy(mut self, strength: u32, stamina: u32) -> Self {
        self.enemy_strength = strength;
        self.enemy_stamina = stamina;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
