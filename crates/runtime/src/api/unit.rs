//! Trait describing the enemy side of a duel.
use async_trait::async_trait;

use super::errors::Result;
use super::view::EnemyView;

/// Operations the battle controller may perform on its enemy.
///
/// The controller never reads or writes enemy stamina directly; every
/// interaction goes through this trait. [`crate::EnemyHandle`] is the
/// production implementation, backed by a worker task.
#[async_trait]
pub trait EnemyUnit: Send + Sync {
    /// Apply damage and resolve, after the attack delay, to whether the enemy
    /// is still alive.
    async fn take_damage(&self, damage: u32) -> Result<bool>;

    async fn strength(&self) -> Result<u32>;

    /// Restore starting stamina immediately.
    async fn reset(&self) -> Result<()>;

    async fn snapshot(&self) -> Result<EnemyView>;
}
