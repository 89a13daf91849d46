use std::time::Duration;

use game_core::{
    Archetype, BattlePhase, Combatant, GameConfig, INITIAL_PROMPT, Outcome, RESET_PROMPT,
    ScriptedRandom, SetupError, Vitality,
};
use runtime::{
    BattleEvent, EnemyEvent, Event, RoundReport, Runtime, RuntimeConfig, RuntimeError, Topic,
};
use tokio::time::Instant;

async fn arena(game_config: GameConfig, random: ScriptedRandom) -> Runtime {
    Runtime::builder()
        .config(RuntimeConfig {
            game_config,
            ..RuntimeConfig::default()
        })
        .random(random)
        .archetype(Archetype::Goblin)
        .build()
        .await
        .expect("runtime should build")
}

fn resolved(report: RoundReport) -> runtime::RoundSummary {
    match report {
        RoundReport::Resolved(summary) => summary,
        RoundReport::BattleOver => panic!("round should have been played"),
    }
}

#[tokio::test(start_paused = true)]
async fn fresh_battle_view() {
    let runtime = arena(GameConfig::default(), ScriptedRandom::new()).await;

    let view = runtime.view().await;
    assert_eq!(view.round, 0);
    assert_eq!(view.phase, BattlePhase::InProgress);
    assert_eq!(view.message, INITIAL_PROMPT);
    assert_eq!(view.player_strength, 3);
    assert_eq!(view.player_stamina, 20);

    let enemy = view.enemy.expect("enemy reachable");
    assert_eq!(enemy.archetype, Archetype::Goblin);
    assert_eq!(enemy.stamina, 12);
    assert_eq!(enemy.vitality, Vitality::Alive);

    runtime.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn exchange_where_both_survive() {
    // Player rolls 4 (10 dmg), enemy rolls 1 (1 dmg), player opens.
    let mut runtime = arena(
        GameConfig::default(),
        ScriptedRandom::new().rolls([4, 1]).flips([true]),
    )
    .await;

    let started = Instant::now();
    let summary = resolved(runtime.play_round().await.unwrap());
    assert!(started.elapsed() >= Duration::from_millis(500));

    assert_eq!(summary.round, 1);
    assert_eq!(summary.first, Combatant::Player);
    assert_eq!(summary.player_damage, 10);
    assert_eq!(summary.enemy_damage, 1);
    assert_eq!(summary.outcome, None);
    assert_eq!(
        summary.message,
        "Round 1\nYou attack (10 dmg).\nEnemy attacks (1 dmg).\nYour HP: 19"
    );

    let view = runtime.view().await;
    assert_eq!(view.phase, BattlePhase::InProgress);
    assert_eq!(view.player_stamina, 19);
    assert_eq!(view.enemy.map(|enemy| enemy.stamina), Some(2));
}

#[tokio::test(start_paused = true)]
async fn killing_blow_wins_and_freezes_the_battle() {
    // Player rolls 2 against an enemy on 3 stamina: 4 dmg, lethal.
    let mut runtime = arena(
        GameConfig::default().with_enemy(2, 3),
        ScriptedRandom::new().rolls([2, 6]).flips([true]),
    )
    .await;

    let summary = resolved(runtime.play_round().await.unwrap());
    assert_eq!(summary.outcome, Some(Outcome::Victory));
    assert!(summary.message.ends_with("Victory! Enemy defeated."));

    let view = runtime.view().await;
    assert_eq!(view.phase, BattlePhase::Won);
    assert_eq!(view.player_stamina, 20, "enemy never answered");
    assert_eq!(
        view.enemy.map(|enemy| enemy.vitality),
        Some(Vitality::Defeated)
    );

    // Further rounds change nothing.
    assert_eq!(runtime.play_round().await.unwrap(), RoundReport::BattleOver);
    let after = runtime.view().await;
    assert_eq!(after, view);
}

#[tokio::test(start_paused = true)]
async fn lethal_opening_blow_loses_without_waiting() {
    // Enemy opens with a roll of 3: 5 dmg against 4 stamina.
    let mut runtime = arena(
        GameConfig::default().with_player(3, 4),
        ScriptedRandom::new().rolls([6, 3]).flips([false]),
    )
    .await;

    let started = Instant::now();
    let summary = resolved(runtime.play_round().await.unwrap());
    assert!(started.elapsed() < Duration::from_millis(500));

    assert_eq!(summary.first, Combatant::Enemy);
    assert_eq!(summary.outcome, Some(Outcome::Defeat));
    assert_eq!(summary.message, "Round 1\nEnemy attacks (5 dmg).\nDefeat...");

    let view = runtime.view().await;
    assert_eq!(view.phase, BattlePhase::Lost);
    assert_eq!(view.player_stamina, 0);
    assert_eq!(view.enemy.map(|enemy| enemy.stamina), Some(12));
}

#[tokio::test(start_paused = true)]
async fn player_answer_after_enemy_opening_can_win() {
    // Enemy opens with 1 dmg, player answers with 4 dmg against 3 stamina.
    let mut runtime = arena(
        GameConfig::default().with_enemy(2, 3),
        ScriptedRandom::new().rolls([2, 1]).flips([false]),
    )
    .await;

    let summary = resolved(runtime.play_round().await.unwrap());
    assert_eq!(summary.first, Combatant::Enemy);
    assert_eq!(summary.outcome, Some(Outcome::Victory));
    assert_eq!(
        summary.message,
        "Round 1\nEnemy attacks (1 dmg).\nYour HP: 19\nYou attack (4 dmg).\nVictory! Enemy defeated."
    );

    let view = runtime.view().await;
    assert_eq!(view.phase, BattlePhase::Won);
    assert_eq!(view.player_stamina, 19);
    assert_eq!(
        view.enemy.map(|enemy| enemy.vitality),
        Some(Vitality::Defeated)
    );
}

#[tokio::test(start_paused = true)]
async fn reset_restores_everything_mid_battle() {
    let mut runtime = arena(
        GameConfig::default(),
        ScriptedRandom::new().rolls([3, 5]).flips([true]),
    )
    .await;

    resolved(runtime.play_round().await.unwrap());
    runtime.reset().await.unwrap();

    let view = runtime.view().await;
    assert_eq!(view.round, 0);
    assert_eq!(view.phase, BattlePhase::InProgress);
    assert_eq!(view.message, RESET_PROMPT);
    assert_eq!(view.player_stamina, 20);
    assert_eq!(view.enemy.map(|enemy| enemy.stamina), Some(12));
}

#[tokio::test(start_paused = true)]
async fn reset_after_defeat_allows_a_new_battle() {
    let mut runtime = arena(
        GameConfig::default().with_player(3, 1),
        ScriptedRandom::new().rolls([1, 6, 1, 1]).flips([false, true]),
    )
    .await;

    let summary = resolved(runtime.play_round().await.unwrap());
    assert_eq!(summary.outcome, Some(Outcome::Defeat));

    runtime.reset().await.unwrap();

    // Player opens with 1 dmg, enemy answers with 1 dmg: back to defeat.
    let summary = resolved(runtime.play_round().await.unwrap());
    assert_eq!(summary.round, 1);
    assert_eq!(summary.player_damage, 1);
    assert_eq!(summary.outcome, Some(Outcome::Defeat));
    assert_eq!(runtime.view().await.enemy.map(|enemy| enemy.stamina), Some(11));
}

#[tokio::test(start_paused = true)]
async fn enemy_rejects_overlapping_strikes() {
    let runtime = arena(GameConfig::default(), ScriptedRandom::new()).await;
    let enemy = runtime.enemy();

    let (first, second) = tokio::join!(enemy.take_damage(1), enemy.take_damage(1));

    assert!(first.unwrap());
    assert!(matches!(second, Err(RuntimeError::EnemyBusy)));
    assert_eq!(enemy.snapshot().await.unwrap().stamina, 11);
}

#[tokio::test(start_paused = true)]
async fn round_fails_while_another_strike_is_pending() {
    let mut runtime = arena(
        GameConfig::default(),
        ScriptedRandom::new().rolls([4, 1]).flips([true]),
    )
    .await;
    let enemy = runtime.enemy();

    let (outside, round) = tokio::join!(enemy.take_damage(1), runtime.play_round());

    assert!(outside.unwrap());
    assert!(matches!(round, Err(RuntimeError::EnemyBusy)));

    let view = runtime.view().await;
    assert_eq!(view.round, 0);
    assert_eq!(view.phase, BattlePhase::InProgress);
    assert_eq!(view.message, INITIAL_PROMPT);
    assert_eq!(view.enemy.map(|enemy| enemy.stamina), Some(11));
}

#[tokio::test(start_paused = true)]
async fn failed_round_after_enemy_opening_leaves_no_trace() {
    // Enemy opens and lands 1 dmg before the player's strike is rejected.
    let mut runtime = arena(
        GameConfig::default(),
        ScriptedRandom::new().rolls([4, 1]).flips([false]),
    )
    .await;
    let enemy = runtime.enemy();
    let mut battle_rx = runtime.subscribe(Topic::Battle);

    let (outside, round) = tokio::join!(enemy.take_damage(1), runtime.play_round());

    assert!(outside.unwrap());
    assert!(matches!(round, Err(RuntimeError::EnemyBusy)));

    let view = runtime.view().await;
    assert_eq!(view.round, 0);
    assert_eq!(view.phase, BattlePhase::InProgress);
    assert_eq!(view.player_stamina, 20);
    assert_eq!(view.message, INITIAL_PROMPT);
    assert!(battle_rx.try_recv().is_err());

    // The next round starts cleanly from round 1.
    let summary = resolved(runtime.play_round().await.unwrap());
    assert_eq!(summary.round, 1);
}

#[tokio::test(start_paused = true)]
async fn round_publishes_enemy_and_battle_events() {
    let mut runtime = arena(
        GameConfig::default().with_enemy(2, 3),
        ScriptedRandom::new().rolls([2, 6]).flips([true]),
    )
    .await;
    let mut battle_rx = runtime.subscribe(Topic::Battle);
    let mut enemy_rx = runtime.subscribe(Topic::Enemy);

    resolved(runtime.play_round().await.unwrap());

    assert_eq!(
        enemy_rx.recv().await.unwrap(),
        Event::Enemy(EnemyEvent::Damaged {
            damage: 4,
            stamina: 0,
            alive: false,
        })
    );
    assert_eq!(
        battle_rx.recv().await.unwrap(),
        Event::Battle(BattleEvent::Finished {
            round: 1,
            outcome: Outcome::Victory,
        })
    );
    assert_eq!(
        battle_rx.recv().await.unwrap(),
        Event::Battle(BattleEvent::RoundResolved {
            round: 1,
            first: Combatant::Player,
            player_damage: 4,
            enemy_damage: 11,
            phase: BattlePhase::Won,
        })
    );

    runtime.reset().await.unwrap();
    assert_eq!(
        enemy_rx.recv().await.unwrap(),
        Event::Enemy(EnemyEvent::Reset { stamina: 3 })
    );
    assert_eq!(
        battle_rx.recv().await.unwrap(),
        Event::Battle(BattleEvent::Reset)
    );
}

#[tokio::test]
async fn zero_strength_is_rejected_at_build() {
    let result = Runtime::builder()
        .config(RuntimeConfig {
            game_config: GameConfig::default().with_player(0, 20),
            ..RuntimeConfig::default()
        })
        .build()
        .await;

    assert!(matches!(
        result,
        Err(RuntimeError::Setup(SetupError::ZeroStrength { side: "player" }))
    ));
}

#[tokio::test(start_paused = true)]
async fn seeded_battles_replay_identically() {
    async fn play(seed: u64) -> Vec<RoundReport> {
        let mut runtime = Runtime::builder()
            .config(RuntimeConfig {
                seed: Some(seed),
                ..RuntimeConfig::default()
            })
            .build()
            .await
            .unwrap();

        let mut reports = Vec::new();
        for _ in 0..5 {
            reports.push(runtime.play_round().await.unwrap());
        }
        reports
    }

    assert_eq!(play(7).await, play(7).await);
}
