//! Enemy worker that owns the authoritative [`game_core::EnemyState`].
//!
//! Receives commands from [`crate::EnemyHandle`], applies damage immediately
//! and answers the damage request only after the attack delay. While a strike
//! is pending the worker stays responsive to every other command but rejects
//! further damage, so at most one attack is ever in flight.

use std::pin::Pin;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Duration, Instant, Sleep};
use tracing::{debug, info, warn};

use game_core::EnemyState;

use crate::api::{EnemyView, Result, RuntimeError};
use crate::events::{EnemyEvent, Event, EventBus};

/// Commands that can be sent to the enemy worker
pub enum Command {
    /// Apply damage; the reply is held back until the attack delay elapses.
    TakeDamage {
        damage: u32,
        reply: oneshot::Sender<Result<bool>>,
    },
    Strength {
        reply: oneshot::Sender<u32>,
    },
    /// Query the current enemy state (read-only).
    Snapshot {
        reply: oneshot::Sender<EnemyView>,
    },
    Reset {
        reply: oneshot::Sender<()>,
    },
}

/// Damage already applied whose answer waits for the delay timer.
struct PendingStrike {
    reply: oneshot::Sender<Result<bool>>,
    alive: bool,
}

impl PendingStrike {
    fn resolve(self) {
        if self.reply.send(Ok(self.alive)).is_err() {
            debug!("TakeDamage reply channel closed (caller dropped)");
        }
    }
}

/// Background task serving enemy commands.
pub struct EnemyWorker {
    state: EnemyState,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    attack_delay: Duration,
}

impl EnemyWorker {
    pub fn new(
        state: EnemyState,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        attack_delay: Duration,
    ) -> Self {
        info!(
            "EnemyWorker initialized: archetype={}, strength={}, stamina={}",
            state.archetype(),
            state.strength(),
            state.stamina()
        );

        Self {
            state,
            command_rx,
            event_bus,
            attack_delay,
        }
    }

    /// Main worker loop. Ends when every handle has been dropped.
    pub async fn run(mut self) {
        let mut pending: Option<PendingStrike> = None;
        let delay = time::sleep(Duration::ZERO);
        tokio::pin!(delay);

        loop {
            tokio::select! {
                () = &mut delay, if pending.is_some() => {
                    if let Some(strike) = pending.take() {
                        strike.resolve();
                    }
                }
                command = self.command_rx.recv() => {
                    let Some(command) = command else { break };
                    self.handle_command(command, &mut pending, delay.as_mut());
                }
            }
        }

        // An attack in flight always resolves, even during shutdown.
        if let Some(strike) = pending.take() {
            delay.as_mut().await;
            strike.resolve();
        }

        debug!("EnemyWorker stopped");
    }

    fn handle_command(
        &mut self,
        command: Command,
        pending: &mut Option<PendingStrike>,
        delay: Pin<&mut Sleep>,
    ) {
        match command {
            Command::TakeDamage { damage, reply } => {
                if pending.is_some() {
                    warn!(damage, "Rejecting damage while a previous attack resolves");
                    if reply.send(Err(RuntimeError::EnemyBusy)).is_err() {
                        debug!("TakeDamage reply channel closed (caller dropped)");
                    }
                    return;
                }

                let vitality = self.state.take_damage(damage);
                let stamina = self.state.stamina();
                debug!(damage, stamina, ?vitality, "Enemy took damage");

                self.event_bus.publish(Event::Enemy(EnemyEvent::Damaged {
                    damage,
                    stamina,
                    alive: vitality.is_alive(),
                }));

                delay.reset(Instant::now() + self.attack_delay);
                *pending = Some(PendingStrike {
                    reply,
                    alive: vitality.is_alive(),
                });
            }
            Command::Strength { reply } => {
                if reply.send(self.state.strength()).is_err() {
                    debug!("Strength reply channel closed (caller dropped)");
                }
            }
            Command::Snapshot { reply } => {
                if reply.send(EnemyView::from(&self.state)).is_err() {
                    debug!("Snapshot reply channel closed (caller dropped)");
                }
            }
            Command::Reset { reply } => {
                self.state.reset();
                debug!(stamina = self.state.stamina(), "Enemy reset");

                self.event_bus.publish(Event::Enemy(EnemyEvent::Reset {
                    stamina: self.state.stamina(),
                }));

                if reply.send(()).is_err() {
                    debug!("Reset reply channel closed (caller dropped)");
                }
            }
        }
    }
}
