//! Cloneable façade for issuing commands to the enemy worker.
//!
//! [`EnemyHandle`] hides channel plumbing and offers async helpers for every
//! enemy operation. Each call sends one command and awaits its reply.
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

use super::errors::{Result, RuntimeError};
use super::unit::EnemyUnit;
use super::view::EnemyView;
use crate::workers::Command;

/// Client-facing handle to the enemy unit
#[derive(Clone)]
pub struct EnemyHandle {
    command_tx: mpsc::Sender<Command>,
}

impl EnemyHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Apply damage; resolves once the attack delay has elapsed.
    ///
    /// Fails with [`RuntimeError::EnemyBusy`] if another damage application
    /// is still pending.
    pub async fn take_damage(&self, damage: u32) -> Result<bool> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.send(Command::TakeDamage {
            damage,
            reply: reply_tx,
        })
        .await?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    pub async fn strength(&self) -> Result<u32> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Strength { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    pub async fn reset(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Reset { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Query the current enemy state (read-only snapshot)
    pub async fn snapshot(&self) -> Result<EnemyView> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(Command::Snapshot { reply: reply_tx }).await?;
        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }
}

#[async_trait]
impl EnemyUnit for EnemyHandle {
    async fn take_damage(&self, damage: u32) -> Result<bool> {
        EnemyHandle::take_damage(self, damage).await
    }

    async fn strength(&self) -> Result<u32> {
        EnemyHandle::strength(self).await
    }

    async fn reset(&self) -> Result<()> {
        EnemyHandle::reset(self).await
    }

    async fn snapshot(&self) -> Result<EnemyView> {
        EnemyHandle::snapshot(self).await
    }
}
