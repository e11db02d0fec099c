//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Skirmish client configuration.
#[derive(Clone, Debug)]
pub struct SkirmishConfig {
    /// Seed of the first battle; later rematches add the game number.
    /// `None` picks a fresh seed from the clock.
    pub seed: Option<u64>,
    /// Scenario RON file. `None` plays the built-in skirmish.
    pub scenario: Option<PathBuf>,
    /// Battle tuning TOML file. `None` uses the engine defaults.
    pub battle_config: Option<PathBuf>,
    /// Pause after each printed log line.
    pub turn_delay: Duration,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl Default for SkirmishConfig {
    fn default() -> Self {
        Self {
            seed: None,
            scenario: None,
            battle_config: None,
            turn_delay: Duration::from_millis(Self::DEFAULT_TURN_DELAY_MS),
            session_id: None,
            log_dir: None,
        }
    }
}

impl SkirmishConfig {
    pub const DEFAULT_TURN_DELAY_MS: u64 = 400;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SKIRMISH_SEED` - Battle seed (default: clock)
    /// - `SKIRMISH_SCENARIO` - Scenario RON path (default: built-in skirmish)
    /// - `SKIRMISH_BATTLE_CONFIG` - Battle tuning TOML path
    /// - `SKIRMISH_TURN_DELAY_MS` - Delay between log lines (default: 400)
    /// - `SKIRMISH_SESSION_ID` - Log session name (default: `session_<unix time>`)
    /// - `SKIRMISH_LOG_DIR` - Log root (default: platform cache dir)
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        config.seed = read_var(&lookup, "SKIRMISH_SEED");
        config.scenario = read_var(&lookup, "SKIRMISH_SCENARIO");
        config.battle_config = read_var(&lookup, "SKIRMISH_BATTLE_CONFIG");
        if let Some(ms) = read_var::<u64>(&lookup, "SKIRMISH_TURN_DELAY_MS") {
            config.turn_delay = Duration::from_millis(ms);
        }
        config.session_id = read_var(&lookup, "SKIRMISH_SESSION_ID");
        config.log_dir = read_var(&lookup, "SKIRMISH_LOG_DIR");

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = lookup(key)?;
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    value.parse().ok()
}
