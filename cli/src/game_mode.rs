use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tictactoe_engine::tictactoe::Mark;

/// Mark played by the bot in vs-bot mode; the human always opens as X.
pub const BOT_MARK: Mark = Mark::O;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    #[default]
    TwoPlayer,
    VsBot,
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "two-player" | "two" | "pvp" => Ok(GameMode::TwoPlayer),
            "vs-bot" | "bot" => Ok(GameMode::VsBot),
            other => Err(format!("Unknown mode '{}', expected two-player|vs-bot", other)),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "Two Players"),
            GameMode::VsBot => write!(f, "VS Bot"),
        }
    }
}
