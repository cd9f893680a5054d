//! Arena client binary.
//!
//! Composition root that assembles content, configuration, logging and the
//! match runtime, then runs one match headless with a scripted player 1 and
//! prints commentary as events arrive.
//!
//! # Examples
//!
//! ```bash
//! # Random fighters, flat-out simulation
//! cargo run -p fight-client
//!
//! # Fixed matchup and seed at wall-clock speed
//! ARENA_FIGHTER=watson ARENA_OPPONENT=glados ARENA_SEED=7 ARENA_REALTIME=1 \
//!     cargo run -p fight-client
//! ```

mod autopilot;
mod config;
mod logging;
mod presenter;

use anyhow::{Context, Result, anyhow};
use tokio::sync::broadcast::{self, error::RecvError};

use fight_content::{ContentFactory, Roster, SettingsLoader};
use fight_core::env::compute_seed;
use fight_core::{FighterProfile, MatchConfig, PcgRng, RngSource, Stage};
use fight_runtime::{Event, Pacing, Runtime, RuntimeConfig, Topic};

use autopilot::AggressiveInputProvider;
use config::ClientConfig;
use presenter::{Commentary, final_report};

/// RNG stream for picking fighters and stage, kept apart from the match stream.
const SELECTION_STREAM: u64 = 1;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let log_dir = config.log_dir.as_deref().map(logging::resolve_log_dir);
    let _log_guard = logging::setup_logging(log_dir.as_deref())?;

    let roster = load_roster(&config)?;
    let match_config = load_match_config(&config)?;
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);

    let mut rng = PcgRng::seed_from_u64(compute_seed(seed, SELECTION_STREAM));
    let (player1, player2, stage) = select_matchup(&roster, &config, &mut rng)?;

    tracing::info!(
        player1 = %player1.name,
        player2 = %player2.name,
        stage = %stage.name,
        seed,
        "Starting match"
    );

    let runtime_config = RuntimeConfig {
        pacing: if config.realtime {
            Pacing::Realtime
        } else {
            Pacing::Unpaced
        },
        seed: Some(seed),
        event_buffer_size: 1024,
        match_config: match_config.clone(),
        ..RuntimeConfig::default()
    };

    let commentary = Commentary::new(&player1.name, &player2.name);
    println!("Stage: {} - {}", stage.name, stage.description);

    let runtime = Runtime::builder()
        .config(runtime_config)
        .player1(player1)
        .player2(player2)
        .stage(stage)
        .input_provider(AggressiveInputProvider::new(match_config.combat.special_cost))
        .build()
        .await?;

    let match_rx = runtime.subscribe(Topic::Match);
    let combat_rx = runtime.subscribe(Topic::Combat);
    let printer = tokio::spawn(print_events(commentary, match_rx, combat_rx));

    let handle = runtime.handle();
    handle.begin().await?;

    let result = runtime.wait_for_match_end().await?;
    printer.await.context("event printer panicked")?;

    println!("{}", final_report(&result, runtime.seed()));

    drop(handle);
    runtime.shutdown().await?;
    Ok(())
}

fn load_roster(config: &ClientConfig) -> Result<Roster> {
    match &config.data_dir {
        Some(dir) => ContentFactory::new(dir)
            .load_roster()
            .with_context(|| format!("Failed to load roster from {}", dir.display())),
        None => ContentFactory::builtin_roster(),
    }
}

fn load_match_config(config: &ClientConfig) -> Result<MatchConfig> {
    let mut match_config = if let Some(path) = &config.settings {
        SettingsLoader::load(path)?
    } else if let Some(dir) = &config.data_dir {
        ContentFactory::new(dir).load_settings()?
    } else {
        MatchConfig::default()
    };

    if let Some(difficulty) = config.difficulty {
        match_config.opponent_difficulty = difficulty;
    }
    Ok(match_config)
}

fn select_matchup(
    roster: &Roster,
    config: &ClientConfig,
    rng: &mut impl RngSource,
) -> Result<(FighterProfile, FighterProfile, Stage)> {
    let player1 = match &config.fighter {
        Some(name) => roster
            .fighter(name)
            .ok_or_else(|| anyhow!("Unknown fighter: {name}"))?,
        None => roster
            .random_fighter(rng)
            .ok_or_else(|| anyhow!("Roster has no fighters"))?,
    };
    let player2 = match &config.opponent {
        Some(name) => roster
            .fighter(name)
            .ok_or_else(|| anyhow!("Unknown opponent: {name}"))?,
        None => roster
            .random_opponent(&player1.name, rng)
            .ok_or_else(|| anyhow!("Roster has no fighters"))?,
    };
    let stage = match &config.stage {
        Some(name) => roster
            .stage(name)
            .ok_or_else(|| anyhow!("Unknown stage: {name}"))?,
        None => roster
            .random_stage(rng)
            .ok_or_else(|| anyhow!("Roster has no stages"))?,
    };

    Ok((player1.clone(), player2.clone(), stage.clone()))
}

/// Prints commentary until the match ends or the bus closes.
async fn print_events(
    commentary: Commentary,
    mut match_rx: broadcast::Receiver<Event>,
    mut combat_rx: broadcast::Receiver<Event>,
) {
    loop {
        let received = tokio::select! {
            received = match_rx.recv() => received,
            received = combat_rx.recv() => received,
        };

        let event = match received {
            Ok(event) => event,
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Commentary fell behind; some events were skipped");
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        let Some(match_event) = event.match_event() else {
            continue;
        };
        if let Some(line) = commentary.describe(match_event) {
            println!("{line}");
        }
        if match_event.is_match_end() {
            break;
        }
    }
}
