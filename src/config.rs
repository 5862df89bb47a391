use std::path::Path;

use crate::error::ConfigError;
use crate::game::{PlayerKind, NUM_COLORS};

/// Match setup, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Who drives each color, in turn order Red, Blue, Green, Yellow.
    pub seats: [PlayerKind; NUM_COLORS],
    /// Seed for simulation dice and bots; drawn from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Turn cap after which a simulated match is abandoned.
    pub max_turns: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            seats: [PlayerKind::Bot; NUM_COLORS],
            seed: None,
            max_turns: 10_000,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_turns == 0 {
            return Err(ConfigError::Validation("max_turns must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&MatchConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = MatchConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
seats = ["human", "bot", "bot", "bot"]
"#;
        let config: MatchConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.seats[0], PlayerKind::Human);
        assert_eq!(config.seats[1], PlayerKind::Bot);
        // Other fields should be defaults
        assert_eq!(config.seed, None);
        assert_eq!(config.max_turns, 10_000);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: MatchConfig = toml::from_str("").unwrap();
        assert_eq!(config.seats, [PlayerKind::Bot; NUM_COLORS]);
        assert_eq!(config.max_turns, 10_000);
    }

    #[test]
    fn test_validation_rejects_zero_max_turns() {
        let mut config = MatchConfig::default();
        config.max_turns = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = MatchConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.max_turns, 10_000);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
seed = 42
max_turns = 500
"#
        )
        .unwrap();

        let config = MatchConfig::load(&path).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.max_turns, 500);
        // Others are defaults
        assert_eq!(config.seats, [PlayerKind::Bot; NUM_COLORS]);
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = MatchConfig::default_toml();
        let config: MatchConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config.seats, [PlayerKind::Bot; NUM_COLORS]);
    }
}
