//! Event loop tying the runtime, keyboard input and rendering together.
//!
//! A round holds the runtime lock for the whole attack delay, so it runs as a
//! spawned task. The loop keeps polling input and redrawing meanwhile and
//! patches the enemy panel from `Enemy` topic events until the round result
//! can be read back.

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use game_core::Vitality;
use runtime::{BattleView, EnemyEvent, Event, RoundReport, Runtime, Topic};
use tokio::{
    sync::{Mutex, broadcast, broadcast::error::RecvError},
    task::JoinHandle,
    time::{self, Duration},
};

use crate::input::{InputHandler, KeyAction};
use crate::presentation::{
    terminal::{TerminalSession, Tui},
    ui::{self, RenderContext},
};

const FRAME_INTERVAL_MS: u64 = 16;

type RoundTask = JoinHandle<runtime::Result<RoundReport>>;

pub struct ArenaApp {
    runtime: Arc<Mutex<Runtime>>,
    enemy_rx: broadcast::Receiver<Event>,
    input: InputHandler,
    view: BattleView,
    round_task: Option<RoundTask>,
    status: Option<String>,
}

impl ArenaApp {
    pub async fn new(runtime: Runtime) -> Self {
        let enemy_rx = runtime.subscribe(Topic::Enemy);
        let view = runtime.view().await;

        Self {
            runtime: Arc::new(Mutex::new(runtime)),
            enemy_rx,
            input: InputHandler::new(),
            view,
            round_task: None,
            status: None,
        }
    }

    /// Take over the terminal until the player quits, then shut the runtime
    /// down.
    pub async fn execute(self) -> Result<()> {
        tracing::info!("Arena client starting...");

        let mut session = TerminalSession::enter()?;
        let runtime = self.run(session.terminal_mut()).await?;
        drop(session);

        match Arc::try_unwrap(runtime) {
            Ok(runtime) => runtime.into_inner().shutdown().await?,
            Err(_) => tracing::warn!("Runtime still shared at exit, skipping shutdown"),
        }

        tracing::info!("Arena client stopped");
        Ok(())
    }

    async fn run(mut self, terminal: &mut Tui) -> Result<Arc<Mutex<Runtime>>> {
        self.render(terminal)?;

        loop {
            tokio::select! {
                result = self.enemy_rx.recv() => {
                    if self.handle_enemy_event(result, terminal)? {
                        break;
                    }
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    self.poll_round(terminal).await?;
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        // A round in flight always completes.
        if let Some(task) = self.round_task.take() {
            self.finish_round(task).await?;
        }

        Ok(self.runtime)
    }

    fn handle_enemy_event(
        &mut self,
        result: Result<Event, RecvError>,
        terminal: &mut Tui,
    ) -> Result<bool> {
        match result {
            Ok(Event::Enemy(EnemyEvent::Damaged { stamina, alive, .. })) => {
                if let Some(enemy) = self.view.enemy.as_mut() {
                    enemy.stamina = stamina;
                    enemy.vitality = if alive {
                        Vitality::Alive
                    } else {
                        Vitality::Defeated
                    };
                }
                self.render(terminal)?;
                Ok(false)
            }
            Ok(_) => Ok(false),
            Err(RecvError::Closed) => {
                tracing::warn!("Event stream closed");
                Ok(true)
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale events", skipped);
                Ok(false)
            }
        }
    }

    async fn poll_round(&mut self, terminal: &mut Tui) -> Result<()> {
        let finished = self
            .round_task
            .as_ref()
            .is_some_and(|task| task.is_finished());
        if !finished {
            return Ok(());
        }

        if let Some(task) = self.round_task.take() {
            self.finish_round(task).await?;
            self.render(terminal)?;
        }
        Ok(())
    }

    async fn finish_round(&mut self, task: RoundTask) -> Result<()> {
        match task.await? {
            Ok(RoundReport::Resolved(summary)) => {
                tracing::debug!(round = summary.round, outcome = ?summary.outcome, "Round done");
                self.status = None;
            }
            Ok(RoundReport::BattleOver) => {}
            Err(e) => {
                tracing::warn!("Round failed: {}", e);
                self.status = Some(e.to_string());
            }
        }
        self.refresh().await;
        Ok(())
    }

    async fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<bool> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(false);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_action(self.input.handle_key(key), terminal)
                    .await
            }
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    async fn handle_key_action(&mut self, action: KeyAction, terminal: &mut Tui) -> Result<bool> {
        match action {
            KeyAction::Quit => return Ok(true),
            KeyAction::PlayRound => {
                if self.round_task.is_some() || self.view.is_over() {
                    return Ok(false);
                }
                let runtime = Arc::clone(&self.runtime);
                self.round_task = Some(tokio::spawn(async move {
                    let mut runtime = runtime.lock().await;
                    runtime.play_round().await
                }));
            }
            KeyAction::Reset => {
                if self.round_task.is_some() {
                    return Ok(false);
                }
                let reset = self.runtime.lock().await.reset().await;
                self.status = reset.err().map(|e| {
                    tracing::warn!("Reset failed: {}", e);
                    e.to_string()
                });
                self.refresh().await;
            }
            KeyAction::None => return Ok(false),
        }

        self.render(terminal)?;
        Ok(false)
    }

    async fn refresh(&mut self) {
        self.view = self.runtime.lock().await.view().await;
    }

    fn render(&self, terminal: &mut Tui) -> Result<()> {
        ui::render(
            terminal,
            &RenderContext {
                view: &self.view,
                resolving: self.round_task.is_some(),
                status: self.status.as_deref(),
            },
        )
    }
}
