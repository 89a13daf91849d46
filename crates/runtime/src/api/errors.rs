//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and battle setup so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::SetupError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("enemy worker command channel closed")]
    CommandChannelClosed,

    #[error("enemy worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("enemy is still resolving a previous attack")]
    EnemyBusy,

    #[error("enemy worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("invalid battle setup")]
    Setup(#[from] SetupError),
}
