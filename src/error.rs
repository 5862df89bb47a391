use std::path::PathBuf;

/// Errors reported by the rule engine.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("horse index {0} out of range")]
    InvalidHorse(usize),

    #[error("die face {0} outside 1..=6")]
    InvalidDie(u8),

    #[error("horse {0} cannot move on the registered roll")]
    HorseNotMovable(usize),

    #[error("the match is already decided")]
    MatchOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
