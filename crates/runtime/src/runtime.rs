//! High-level runtime orchestrator.
//!
//! The runtime owns the enemy worker, wires up the command channel and the
//! event bus, and exposes a builder-based API for clients to drive the duel.

use tokio::sync::{broadcast, mpsc};
use tokio::task::JoinHandle;
use tokio::time::Duration;

use game_core::{Archetype, EnemyState, GameConfig, PlayerState, RandomSource, SeededRandom};

use crate::api::{BattleView, EnemyHandle, Result, RoundReport, RuntimeError};
use crate::battle::BattleController;
use crate::events::{Event, EventBus, Topic};
use crate::providers::ThreadRandom;
use crate::workers::{Command, EnemyWorker};

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    /// Simulated attack-animation time before a damage request resolves.
    pub attack_delay: Duration,
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Seed for deterministic battles. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const DEFAULT_ATTACK_DELAY: Duration = Duration::from_millis(500);
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            attack_delay: Self::DEFAULT_ATTACK_DELAY,
            event_buffer_size: 100,
            command_buffer_size: 32,
            seed: None,
        }
    }
}

/// Main runtime that orchestrates a duel
///
/// Design: Runtime owns the enemy worker and the battle controller.
/// [`EnemyHandle`] provides a cloneable façade to the worker.
pub struct Runtime {
    controller: BattleController<EnemyHandle>,
    event_bus: EventBus,
    enemy_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Play a single round (no-op once the battle is over)
    pub async fn play_round(&mut self) -> Result<RoundReport> {
        self.controller.play_round().await
    }

    /// Start the battle over against the same enemy
    pub async fn reset(&mut self) -> Result<()> {
        self.controller.reset().await
    }

    /// Read-only snapshot for rendering
    pub async fn view(&self) -> BattleView {
        self.controller.view().await
    }

    /// Get a cloneable handle to the enemy worker
    pub fn enemy(&self) -> EnemyHandle {
        self.controller.enemy().clone()
    }

    /// Subscribe to events from a specific topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Shutdown the runtime gracefully
    ///
    /// Outstanding [`EnemyHandle`] clones keep the worker alive, so drop them
    /// first.
    pub async fn shutdown(self) -> Result<()> {
        let Runtime {
            controller,
            event_bus: _,
            enemy_worker_handle,
        } = self;
        drop(controller);

        enemy_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        tracing::info!("Runtime shut down");
        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    random: Option<Box<dyn RandomSource>>,
    archetype: Option<Archetype>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            random: None,
            archetype: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a specific randomness source instead of the configured one
    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Box::new(random));
        self
    }

    /// Fix the enemy archetype instead of rolling it
    pub fn archetype(mut self, archetype: Archetype) -> Self {
        self.archetype = Some(archetype);
        self
    }

    /// Build the runtime and spawn the enemy worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let RuntimeBuilder {
            config,
            random,
            archetype,
        } = self;
        let game = &config.game_config;

        let mut random: Box<dyn RandomSource> = match (random, config.seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => Box::new(SeededRandom::new(seed)),
            (None, None) => Box::new(ThreadRandom::new()),
        };
        let archetype = archetype.unwrap_or_else(|| Archetype::random(random.as_mut()));

        let player = PlayerState::new(game.player_strength, game.player_stamina)?;
        let enemy = EnemyState::new(archetype, game.enemy_strength, game.enemy_stamina)?;

        let event_bus = EventBus::with_capacity(config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel::<Command>(config.command_buffer_size.max(1));

        let enemy_worker = EnemyWorker::new(enemy, command_rx, event_bus.clone(), config.attack_delay);
        let enemy_worker_handle = tokio::spawn(async move {
            enemy_worker.run().await;
        });

        let controller = BattleController::new(
            game.clone(),
            player,
            EnemyHandle::new(command_tx),
            random,
            event_bus.clone(),
        );

        tracing::info!(
            "Runtime built: archetype={}, attack_delay={:?}",
            archetype,
            config.attack_delay
        );

        Ok(Runtime {
            controller,
            event_bus,
            enemy_worker_handle,
        })
    }
}
