mod board;
mod bot_controller;
mod engine;
mod error;
mod game_state;
mod history;
mod players;
mod scoreboard;
mod settings;
mod types;
mod win_detector;

pub mod patterns;

pub use board::Board;
pub use bot_controller::{BotInput, MEDIUM_HEURISTIC_PROBABILITY, calculate_block_or_win_move, calculate_move};
pub use engine::GameEngine;
pub use error::{EngineError, MoveError};
pub use game_state::{GameSnapshot, MoveOutcome};
pub use history::{DEFAULT_HISTORY_CAPACITY, MoveHistory};
pub use players::{DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerNames};
pub use patterns::{generate, patterns_for};
pub use scoreboard::Scoreboard;
pub use settings::{EngineSettings, MAX_HISTORY_CAPACITY};
pub use types::{Cell, Difficulty, GameStatus, GridSize, Mark, WinPattern};
pub use win_detector::{check_win, check_win_with_line, is_draw};
