//! Scenario loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::ScenarioSpec;

/// Loader for battle scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a ScenarioSpec
    pub fn load(path: &Path) -> LoadResult<ScenarioSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ScenarioSpec> {
        let scenario: ScenarioSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        tracing::debug!(
            scenario = %scenario.name,
            players = scenario.players.len(),
            enemies = scenario.enemies.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// The embedded two-versus-three skirmish.
    pub fn builtin() -> LoadResult<ScenarioSpec> {
        const SKIRMISH: &str = include_str!("../../data/scenarios/skirmish.ron");
        Self::parse(SKIRMISH)
    }
}
