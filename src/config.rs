use std::path::Path;

use crate::ai::{Agent, GreedyAgent, RandomAgent};
use crate::error::ConfigError;
use crate::game::Player;

/// Which built-in agent drives self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Greedy,
}

impl AgentKind {
    /// Build the agent, seeded when `seed` is given.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (AgentKind::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (AgentKind::Random, None) => Box::new(RandomAgent::new()),
            (AgentKind::Greedy, Some(seed)) => Box::new(GreedyAgent::with_seed(seed)),
            (AgentKind::Greedy, None) => Box::new(GreedyAgent::new()),
        }
    }
}

/// Game setup.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// 0 = Player1 moves first, 1 = Player2 moves first.
    pub start_player: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig { start_player: 0 }
    }
}

impl GameConfig {
    pub fn first_player(&self) -> Result<Player, ConfigError> {
        Player::from_index(self.start_player).ok_or_else(|| {
            ConfigError::Validation(
                "game.start_player should be either 0 (Player1 first) or 1 (Player2 first)".into(),
            )
        })
    }
}

/// Self-play run settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    pub num_games: usize,
    pub agent: AgentKind,
    /// Base seed; each game derives its own. Unseeded runs use OS entropy.
    pub seed: Option<u64>,
    /// Print a progress line every N games.
    pub log_interval: usize,
    /// Print every position while playing.
    pub show_board: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            agent: AgentKind::Random,
            seed: None,
            log_interval: 10,
            show_board: false,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub self_play: SelfPlayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.first_player()?;

        if self.self_play.num_games == 0 {
            return Err(ConfigError::Validation(
                "self_play.num_games must be > 0".into(),
            ));
        }
        if self.self_play.log_interval == 0 {
            return Err(ConfigError::Validation(
                "self_play.log_interval must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
