//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Keys that are absent keep their [`BattleConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        let chance = config.skill_chance_percent;
        Ok(config.with_skill_chance_percent(chance))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::DamageType;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "skill_chance_percent = 80").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.skill_chance_percent, 80);
        assert_eq!(config.skill_jitter, BattleConfig::DEFAULT_SKILL_JITTER);
        assert_eq!(config.unarmed, BattleConfig::default().unarmed);
    }

    #[test]
    fn nested_unarmed_profile() {
        let config = ConfigLoader::parse(
            r#"
            skill_jitter = 3

            [unarmed]
            min_damage = 2
            max_damage = 4
            damage_type = "pure"
            "#,
        )
        .unwrap();

        assert_eq!(config.skill_jitter, 3);
        assert_eq!(config.unarmed.max_damage, 4);
        assert_eq!(config.unarmed.damage_type, DamageType::Pure);
    }

    #[test]
    fn negative_jitter_is_a_parse_error() {
        let err = ConfigLoader::parse("skill_jitter = -2147483648").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"), "{err}");
    }

    #[test]
    fn widest_jitter_loads() {
        let config = ConfigLoader::parse("skill_jitter = 4294967295").unwrap();
        assert_eq!(config.skill_jitter, u32::MAX);
    }

    #[test]
    fn out_of_range_chance_is_clamped() {
        let config = ConfigLoader::parse("skill_chance_percent = 250").unwrap();
        assert_eq!(config.skill_chance_percent, 100);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = ConfigLoader::load(&path).unwrap_err().to_string();
        assert!(err.contains("absent.toml"), "{err}");
    }
}
