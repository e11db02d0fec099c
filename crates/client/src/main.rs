//! Skirmish client binary.
//!
//! Loads a scenario, plays it on autopilot while printing the battle log at a
//! readable pace, then offers a rematch.
//!
//! ```bash
//! SKIRMISH_SEED=7 SKIRMISH_TURN_DELAY_MS=0 cargo run -p battle-client
//! ```

use anyhow::{Context, Result};
use battle_client::{Presenter, SkirmishConfig, logging, session};
use battle_content::{ConfigLoader, ScenarioLoader, ScenarioSpec};
use battle_core::BattleConfig;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SkirmishConfig::from_env();
    let _log_guard = logging::setup_logging(&config)?;

    tracing::info!("Starting skirmish client");
    tracing::debug!(?config, "client configuration");

    let scenario = load_scenario(&config)?;
    let battle_config = load_battle_config(&config)?;
    let base_seed = config.seed.or(scenario.seed).unwrap_or_else(session::clock_seed);

    let mut presenter = Presenter::new(tokio::io::stdout(), config.turn_delay);
    let mut answers = BufReader::new(tokio::io::stdin()).lines();

    for game in 0u64.. {
        let seed = base_seed.wrapping_add(game);
        let battle = scenario
            .battle(seed, battle_config.clone())
            .with_context(|| format!("Scenario {:?} is not playable", scenario.name))?;

        session::play(battle, &mut presenter).await?;

        presenter.prompt("Play again? (y/n): ").await?;
        let answer = answers.next_line().await?.unwrap_or_default();
        if !answer.trim().eq_ignore_ascii_case("y") {
            presenter.line("Thanks for playing!").await?;
            break;
        }
        presenter.line("").await?;
    }

    tracing::info!("Client shutdown complete");
    Ok(())
}

fn load_scenario(config: &SkirmishConfig) -> Result<ScenarioSpec> {
    match &config.scenario {
        Some(path) => ScenarioLoader::load(path),
        None => ScenarioLoader::builtin(),
    }
}

fn load_battle_config(config: &SkirmishConfig) -> Result<BattleConfig> {
    match &config.battle_config {
        Some(path) => ConfigLoader::load(path),
        None => Ok(BattleConfig::default()),
    }
}
