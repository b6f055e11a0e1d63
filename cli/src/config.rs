use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::tictactoe::{Difficulty, EngineSettings, GridSize, Mark, PlayerNames};

use crate::game_mode::GameMode;

pub const CONFIG_FILE: &str = "tictactoe_config.yaml";
pub const MAX_BOT_DELAY_MS: u64 = 10_000;
pub const MAX_NAME_LENGTH: usize = 32;

pub fn get_config_manager(path: &str) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub engine: EngineSettings,
    pub game: GameConfig,
    pub players: PlayersConfig,
    /// Fixed seed for reproducible bot play; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.engine.validate()?;
        self.game.validate()?;
        self.players.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub bot_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::TwoPlayer,
            difficulty: Difficulty::Hard,
            bot_delay_ms: 600,
        }
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_delay_ms > MAX_BOT_DELAY_MS {
            return Err(format!("bot_delay_ms must not exceed {}", MAX_BOT_DELAY_MS));
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub x_name: String,
    pub o_name: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            x_name: "Player 1".to_string(),
            o_name: "Player 2".to_string(),
        }
    }
}

impl PlayersConfig {
    pub fn to_names(&self) -> PlayerNames {
        let mut names = PlayerNames::default();
        names.set(Mark::X, &self.x_name);
        names.set(Mark::O, &self.o_name);
        names
    }
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        for name in [&self.x_name, &self.o_name] {
            if name.chars().count() > MAX_NAME_LENGTH {
                return Err(format!("player names must not exceed {} characters", MAX_NAME_LENGTH));
            }
        }
        Ok(())
    }
}

/// Command line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub size: Option<GridSize>,
    pub mode: Option<GameMode>,
    pub difficulty: Option<Difficulty>,
    pub bot_delay_ms: Option<u64>,
    pub x_name: Option<String>,
    pub o_name: Option<String>,
    pub seed: Option<u64>,
}

impl Config {
    pub fn apply(mut self, overrides: Overrides) -> Result<Self, String> {
        if let Some(size) = overrides.size {
            self.engine.grid_size = size;
        }
        if let Some(mode) = overrides.mode {
            self.game.mode = mode;
        }
        if let Some(difficulty) = overrides.difficulty {
            self.game.difficulty = difficulty;
        }
        if let Some(delay) = overrides.bot_delay_ms {
            self.game.bot_delay_ms = delay;
        }
        if let Some(name) = overrides.x_name {
            self.players.x_name = name;
        }
        if let Some(name) = overrides.o_name {
            self.players.o_name = name;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self.validate()?;
        Ok(self)
    }
}
