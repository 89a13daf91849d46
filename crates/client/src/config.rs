//! Client configuration loaded from environment variables.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use runtime::RuntimeConfig;
use tokio::time::Duration;

/// Everything the `arena` binary needs before it can start.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub runtime: RuntimeConfig,
    /// Names the per-session log directory. Generated when unset.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory used for logs.
    pub log_dir: Option<PathBuf>,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ARENA_PLAYER_STRENGTH`, `ARENA_PLAYER_STAMINA`
    /// - `ARENA_ENEMY_STRENGTH`, `ARENA_ENEMY_STAMINA`
    /// - `ARENA_ATTACK_DELAY_MS` - enemy attack delay (default: 500)
    /// - `ARENA_SEED` - fixed seed for a replayable battle
    /// - `ARENA_SESSION_ID` - log session name
    /// - `ARENA_LOG_DIR` - log root directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let game = &mut config.runtime.game_config;

        if let Some(strength) = parse::<u32>(lookup("ARENA_PLAYER_STRENGTH")) {
            game.player_strength = strength.max(1);
        }
        if let Some(stamina) = parse::<u32>(lookup("ARENA_PLAYER_STAMINA")) {
            game.player_stamina = stamina;
        }
        if let Some(strength) = parse::<u32>(lookup("ARENA_ENEMY_STRENGTH")) {
            game.enemy_strength = strength.max(1);
        }
        if let Some(stamina) = parse::<u32>(lookup("ARENA_ENEMY_STAMINA")) {
            game.enemy_stamina = stamina;
        }
        if let Some(millis) = parse::<u64>(lookup("ARENA_ATTACK_DELAY_MS")) {
            config.runtime.attack_delay = Duration::from_millis(millis);
        }

        config.runtime.seed = parse(lookup("ARENA_SEED"));
        config.session_id = lookup("ARENA_SESSION_ID").filter(|id| !id.is_empty());
        config.log_dir = lookup("ARENA_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }
}

fn parse<T: FromStr>(raw: Option<String>) -> Option<T> {
    raw?.trim().parse().ok()
}
