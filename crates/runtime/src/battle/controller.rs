//! Round resolution against an asynchronous enemy.
//!
//! [`BattleController`] owns the player and the battle aggregate, draws each
//! round's plan from `game-core`, and applies it blow by blow. Enemy blows go
//! through [`EnemyUnit::take_damage`] and are awaited before anything else is
//! read, so the survival check always reflects the damage just applied.

use tracing::{debug, info, warn};

use game_core::{
    BattleState, Combatant, GameConfig, Outcome, PlayerState, RandomSource, RoundLog, RoundPlan,
    Vitality,
};

use crate::api::{BattleView, EnemyUnit, Result, RoundReport, RoundSummary};
use crate::events::{BattleEvent, Event, EventBus};

/// Player-side state and round orchestration.
///
/// `play_round` and `reset` take `&mut self`, so a controller can never run
/// two rounds at once.
pub struct BattleController<E> {
    config: GameConfig,
    player: PlayerState,
    battle: BattleState,
    enemy: E,
    random: Box<dyn RandomSource>,
    event_bus: EventBus,
}

impl<E: EnemyUnit> BattleController<E> {
    pub fn new(
        config: GameConfig,
        player: PlayerState,
        enemy: E,
        random: Box<dyn RandomSource>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            config,
            player,
            battle: BattleState::new(),
            enemy,
            random,
            event_bus,
        }
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn battle(&self) -> &BattleState {
        &self.battle
    }

    pub fn enemy(&self) -> &E {
        &self.enemy
    }

    /// Play one round. Once the battle is over this is a no-op that reports
    /// [`RoundReport::BattleOver`].
    ///
    /// # Errors
    ///
    /// Fails only when the enemy unit cannot apply damage (worker gone or a
    /// strike already in flight). Player and battle state are rolled back to
    /// how they were before the round.
    pub async fn play_round(&mut self) -> Result<RoundReport> {
        let player = self.player.clone();
        let battle = self.battle.clone();

        let Some(round) = self.battle.begin_round() else {
            debug!(phase = self.battle.phase().as_str(), "Round ignored, battle over");
            return Ok(RoundReport::BattleOver);
        };

        match self.resolve_round(round).await {
            Ok(summary) => Ok(RoundReport::Resolved(summary)),
            Err(e) => {
                warn!(round, "Round aborted, state rolled back: {}", e);
                self.player = player;
                self.battle = battle;
                Err(e)
            }
        }
    }

    async fn resolve_round(&mut self, round: u32) -> Result<RoundSummary> {
        let enemy_strength = self.enemy_strength().await;
        let plan = RoundPlan::roll(
            round,
            self.random.as_mut(),
            self.player.strength(),
            enemy_strength,
        );
        debug!(
            round,
            first = ?plan.first,
            player_damage = plan.player_damage,
            enemy_damage = plan.enemy_damage,
            "Round planned"
        );

        let mut log = RoundLog::new(round);
        let outcome = match plan.first {
            Combatant::Player => self.player_opens(&plan, &mut log).await?,
            Combatant::Enemy => self.enemy_opens(&plan, &mut log).await?,
        };

        if let Some(outcome) = outcome {
            self.battle.conclude(outcome);
            info!(round, ?outcome, "Battle finished");
            self.event_bus
                .publish(Event::Battle(BattleEvent::Finished { round, outcome }));
        }

        let message = log.into_message();
        self.battle.set_message(message.clone());

        self.event_bus
            .publish(Event::Battle(BattleEvent::RoundResolved {
                round,
                first: plan.first,
                player_damage: plan.player_damage,
                enemy_damage: plan.enemy_damage,
                phase: self.battle.phase(),
            }));

        Ok(RoundSummary {
            round,
            first: plan.first,
            player_damage: plan.player_damage,
            enemy_damage: plan.enemy_damage,
            outcome,
            message,
        })
    }

    /// Restore player stamina, counters and the enemy. Allowed at any time.
    pub async fn reset(&mut self) -> Result<()> {
        self.battle.reset();
        self.player.restore();
        self.enemy.reset().await?;

        info!("Battle reset");
        self.event_bus.publish(Event::Battle(BattleEvent::Reset));
        Ok(())
    }

    /// Snapshot for display surfaces.
    pub async fn view(&self) -> BattleView {
        let enemy = match self.enemy.snapshot().await {
            Ok(view) => Some(view),
            Err(e) => {
                warn!("Enemy snapshot unavailable: {}", e);
                None
            }
        };

        BattleView {
            player_strength: self.player.strength(),
            player_stamina: self.player.stamina(),
            player_initial_stamina: self.player.initial_stamina(),
            round: self.battle.round(),
            phase: self.battle.phase(),
            message: self.battle.message().to_owned(),
            enemy,
        }
    }

    async fn enemy_strength(&self) -> u32 {
        match self.enemy.strength().await {
            Ok(strength) => strength,
            Err(e) => {
                warn!(
                    "Enemy strength unavailable ({}), assuming {}",
                    e, self.config.fallback_enemy_strength
                );
                self.config.fallback_enemy_strength
            }
        }
    }

    /// Player strikes, then the enemy answers if it survived.
    async fn player_opens(
        &mut self,
        plan: &RoundPlan,
        log: &mut RoundLog,
    ) -> Result<Option<Outcome>> {
        if let Some(outcome) = self.player_strikes(plan.player_damage, log).await? {
            return Ok(Some(outcome));
        }
        Ok(self.enemy_strikes(plan.enemy_damage, log))
    }

    /// Enemy strikes; a lethal blow ends the round before the player answers.
    async fn enemy_opens(
        &mut self,
        plan: &RoundPlan,
        log: &mut RoundLog,
    ) -> Result<Option<Outcome>> {
        if let Some(outcome) = self.enemy_strikes(plan.enemy_damage, log) {
            return Ok(Some(outcome));
        }
        self.player_strikes(plan.player_damage, log).await
    }

    async fn player_strikes(
        &mut self,
        damage: u32,
        log: &mut RoundLog,
    ) -> Result<Option<Outcome>> {
        log.player_attacks(damage);
        if self.enemy.take_damage(damage).await? {
            return Ok(None);
        }
        log.victory();
        Ok(Some(Outcome::Victory))
    }

    fn enemy_strikes(&mut self, damage: u32, log: &mut RoundLog) -> Option<Outcome> {
        log.enemy_attacks(damage);
        match self.player.receive_hit(damage) {
            Vitality::Defeated => {
                log.defeat();
                Some(Outcome::Defeat)
            }
            Vitality::Alive => {
                log.player_stamina(self.player.stamina());
                None
            }
        }
    }
}
