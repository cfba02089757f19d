use std::path::PathBuf;

use crate::game::{Action, MoveError};

/// Errors that can occur while playing out a game between agents.
#[derive(Debug, thiserror::Error)]
pub enum SelfPlayError {
    #[error("agent selected illegal action {action:?}: {source}")]
    IllegalAction { action: Action, source: MoveError },

    #[error("game loop stopped before reaching a terminal position")]
    MissingOutcome,
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
