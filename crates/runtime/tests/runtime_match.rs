//! End-to-end runs of the runtime with an unpaced worker.

use std::time::Duration;

use fight_content::ContentFactory;
use fight_core::{GameError, InputSignal, MatchConfig, MatchEvent, MatchPhase, Side};
use fight_runtime::{
    Event, Pacing, Runtime, RuntimeConfig, RuntimeError, ScriptedInputProvider, Topic,
};
use tokio::sync::broadcast::error::RecvError;
use tokio::time::timeout;

const DEADLINE: Duration = Duration::from_secs(30);

fn fast_config() -> RuntimeConfig {
    RuntimeConfig {
        match_config: MatchConfig {
            versus_announce_ms: 0,
            round_announce_ms: 0,
            round_end_delay_ms: 0,
            ..MatchConfig::default()
        },
        event_buffer_size: 4096,
        pacing: Pacing::Unpaced,
        ..RuntimeConfig::default()
    }
}

fn masher() -> ScriptedInputProvider {
    let press = InputSignal {
        light_attack: true,
        right: true,
        ..InputSignal::IDLE
    };
    ScriptedInputProvider::new([press, InputSignal::IDLE])
}

async fn build(seed: u64) -> Runtime {
    let roster = ContentFactory::builtin_roster().unwrap();
    Runtime::builder()
        .config(fast_config())
        .player1(roster.fighter("watson").unwrap().clone())
        .player2(roster.fighter("siri").unwrap().clone())
        .stage(roster.stage("data center").unwrap().clone())
        .input_provider(masher())
        .seed(seed)
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn runs_a_match_to_completion() {
    let runtime = build(7).await;
    assert_eq!(runtime.seed(), 7);
    let handle = runtime.handle();

    handle.begin().await.unwrap();
    let result = timeout(DEADLINE, runtime.wait_for_match_end())
        .await
        .expect("match should finish")
        .unwrap();

    assert_eq!(result.player1_wins.max(result.player2_wins), 2);
    assert!(result.rounds_played >= 2);
    assert!(result.winner_name.is_some());

    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, MatchPhase::MatchEnd);
    assert_eq!(snapshot.player1_wins, result.player1_wins);

    drop(handle);
    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn same_seed_replays_the_same_match() {
    let mut outcomes = Vec::new();
    for _ in 0..2 {
        let runtime = build(1234).await;
        let handle = runtime.handle();
        handle.begin().await.unwrap();
        let result = timeout(DEADLINE, runtime.wait_for_match_end())
            .await
            .expect("match should finish")
            .unwrap();
        let snapshot = handle.snapshot().await.unwrap();
        outcomes.push((result, snapshot));
    }

    assert_eq!(outcomes[0], outcomes[1]);
}

#[tokio::test]
async fn match_topic_opens_with_the_versus_announcement() {
    let runtime = build(3).await;
    let mut match_rx = runtime.subscribe(Topic::Match);

    runtime.handle().begin().await.unwrap();

    let first = loop {
        match match_rx.recv().await {
            Ok(event) => break event,
            Err(RecvError::Lagged(_)) => continue,
            Err(RecvError::Closed) => panic!("event bus closed"),
        }
    };
    match first {
        Event::Match(MatchEvent::VersusAnnounced { player1, player2 }) => {
            assert_eq!(player1, "WATSON");
            assert_eq!(player2, "SIRI");
        }
        other => panic!("unexpected first event: {other:?}"),
    }
}

#[tokio::test]
async fn pause_freezes_the_match() {
    let runtime = build(11).await;
    let handle = runtime.handle();

    handle.begin().await.unwrap();
    assert!(handle.pause().await.unwrap());

    let frozen = handle.snapshot().await.unwrap();
    tokio::task::yield_now().await;
    let still = handle.snapshot().await.unwrap();
    assert!(frozen.paused);
    assert_eq!(frozen, still);

    assert!(!handle.toggle_pause().await.unwrap());
    assert!(!handle.resume().await.unwrap());
}

#[tokio::test]
async fn begin_twice_is_rejected() {
    let runtime = build(5).await;
    let handle = runtime.handle();

    handle.begin().await.unwrap();
    let err = handle.begin().await.unwrap_err();
    let RuntimeError::Match(inner) = err else {
        panic!("unexpected error: {err:?}");
    };
    assert_eq!(inner.error_code(), "MATCH_INVALID_PHASE");
    assert!(inner.severity().is_recoverable());
}

#[tokio::test]
async fn failing_input_provider_plays_idle_ticks() {
    let roster = ContentFactory::builtin_roster().unwrap();
    let runtime = Runtime::builder()
        .config(fast_config())
        .player1(roster.fighter("watson").unwrap().clone())
        .player2(roster.fighter("siri").unwrap().clone())
        .input_provider(ScriptedInputProvider::new([]))
        .seed(9)
        .build()
        .await
        .unwrap();
    let handle = runtime.handle();
    let mut combat_rx = runtime.subscribe(Topic::Combat);

    handle.begin().await.unwrap();
    timeout(DEADLINE, async {
        while handle.snapshot().await.unwrap().tick.0 <= 10 {
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("worker keeps ticking");

    // Every tick fell back to idle input, so the player never swung.
    while let Ok(event) = combat_rx.try_recv() {
        assert!(!matches!(
            event,
            Event::Combat(
                MatchEvent::AttackStarted {
                    side: Side::Player1,
                    ..
                } | MatchEvent::SpecialMoveUsed {
                    side: Side::Player1,
                    ..
                }
            )
        ));
    }
}

#[tokio::test]
async fn rematch_returns_to_select() {
    let runtime = build(21).await;
    let handle = runtime.handle();

    handle.begin().await.unwrap();
    timeout(DEADLINE, runtime.wait_for_match_end())
        .await
        .expect("match should finish")
        .unwrap();

    handle.rematch().await.unwrap();
    let snapshot = handle.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, MatchPhase::Select);
    assert_eq!(snapshot.tick.0, 0);
    assert_eq!((snapshot.player1_wins, snapshot.player2_wins), (0, 0));
}

#[tokio::test]
async fn missing_opponent_fails_to_build() {
    let roster = ContentFactory::builtin_roster().unwrap();
    let err = Runtime::builder()
        .player1(roster.fighters()[0].clone())
        .build()
        .await
        .err()
        .expect("build should fail");

    assert!(matches!(
        err,
        RuntimeError::MissingFighter {
            side: Side::Player2
        }
    ));
}
