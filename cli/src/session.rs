use std::time::Duration;
use tictactoe_engine::log;
use tictactoe_engine::tictactoe::{Difficulty, GameEngine, Mark, MoveOutcome, PlayerNames};

use crate::commands::{Command, HELP_TEXT, MoveTarget};
use crate::game_mode::{BOT_MARK, GameMode};
use crate::render::{render_board, render_scoreboard};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub output: Vec<String>,
    pub quit: bool,
}

impl CommandResult {
    fn lines(output: Vec<String>) -> Self {
        Self { output, quit: false }
    }

    fn line(message: impl Into<String>) -> Self {
        Self::lines(vec![message.into()])
    }
}

/// Terminal front end around a [`GameEngine`]: game mode and bot pacing live
/// here, the rules live in the engine.
pub struct GameSession {
    engine: GameEngine,
    mode: GameMode,
    difficulty: Difficulty,
    bot_delay: Duration,
}

impl GameSession {
    pub fn new(
        engine: GameEngine,
        mode: GameMode,
        difficulty: Difficulty,
        names: PlayerNames,
        bot_delay: Duration,
    ) -> Self {
        let mut engine = engine;
        engine.set_player_name(Mark::X, &names.x);
        engine.set_player_name(Mark::O, &names.o);
        Self {
            engine,
            mode,
            difficulty,
            bot_delay,
        }
    }

    fn names(&self) -> &PlayerNames {
        self.engine.player_names()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::VsBot
            && self.engine.is_active()
            && self.engine.current_mark() == BOT_MARK
    }

    pub fn status_line(&self) -> String {
        let mark = self.engine.current_mark();
        if self.engine.is_active() {
            format!("{} ({}) to move", self.names().get(mark), mark)
        } else {
            "Game over. Type 'restart' to play again.".to_string()
        }
    }

    pub fn screen(&self) -> Vec<String> {
        vec![render_board(self.engine.board()), self.status_line()]
    }

    pub fn handle_command(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Place(target) => self.place(target),
            Command::Undo => self.undo(),
            Command::Restart => {
                self.engine.restart();
                CommandResult::lines(self.screen())
            }
            Command::NewGame => {
                self.engine.new_game();
                let mut output = vec![render_scoreboard(self.engine.scoreboard(), self.names())];
                output.extend(self.screen());
                CommandResult::lines(output)
            }
            Command::Size(size) => {
                self.engine.reset(size);
                let mut output = vec![format!("Grid size set to {}", size)];
                output.extend(self.screen());
                CommandResult::lines(output)
            }
            Command::Mode(mode) => {
                self.mode = mode;
                let message = format!("Game mode set to {}", mode);
                log!("{}", message);
                self.engine.record_event(&message);
                CommandResult::line(message)
            }
            Command::Difficulty(difficulty) => {
                self.difficulty = difficulty;
                let message = format!("Bot difficulty set to {}", difficulty);
                self.engine.record_event(&message);
                CommandResult::line(message)
            }
            Command::Name(mark, name) => {
                self.engine.set_player_name(mark, &name);
                CommandResult::line(format!("{} is now {}", mark, self.names().get(mark)))
            }
            Command::History => {
                let entries: Vec<String> = self.engine.history().entries().cloned().collect();
                if entries.is_empty() {
                    CommandResult::line("No history yet")
                } else {
                    CommandResult::lines(entries)
                }
            }
            Command::ClearHistory => {
                self.engine.clear_history();
                CommandResult::line("History cleared")
            }
            Command::Score => {
                CommandResult::line(render_scoreboard(self.engine.scoreboard(), self.names()))
            }
            Command::Board => CommandResult::lines(self.screen()),
            Command::Help => CommandResult::line(HELP_TEXT),
            Command::Quit => CommandResult {
                output: vec![render_scoreboard(self.engine.scoreboard(), self.names())],
                quit: true,
            },
        }
    }

    fn resolve(&self, target: MoveTarget) -> Result<usize, String> {
        match target {
            MoveTarget::Index(index) => Ok(index),
            MoveTarget::RowCol(row, col) => self
                .engine
                .board()
                .index_of(row - 1, col - 1)
                .ok_or_else(|| format!("{},{} is off the board", row, col)),
        }
    }

    fn place(&mut self, target: MoveTarget) -> CommandResult {
        if self.is_bot_turn() {
            return CommandResult::line("Wait for the bot to move");
        }
        let index = match self.resolve(target) {
            Ok(index) => index,
            Err(message) => return CommandResult::line(message),
        };
        let mark = self.engine.current_mark();
        let outcome = self.engine.apply_move(index);
        CommandResult::lines(self.describe(mark, outcome))
    }

    /// In vs-bot mode undo rewinds to the human's turn, otherwise the bot
    /// would immediately replay the move that was just taken back.
    fn undo(&mut self) -> CommandResult {
        if let Err(e) = self.engine.try_undo() {
            return CommandResult::line(e.to_string());
        }
        if self.mode == GameMode::VsBot {
            while self.engine.current_mark() == BOT_MARK && self.engine.undo() {}
        }
        let mut output = vec!["Move undone".to_string()];
        output.extend(self.screen());
        CommandResult::lines(output)
    }

    fn describe(&self, mark: Mark, outcome: MoveOutcome) -> Vec<String> {
        match outcome {
            MoveOutcome::Rejected(e) => vec![e.to_string()],
            MoveOutcome::Continue => self.screen(),
            MoveOutcome::Win(winner) => {
                let name = self.names().get(winner);
                let mut output = vec![render_board(self.engine.board())];
                if let Some(line) = self.engine.winning_line() {
                    let cells: Vec<String> = line
                        .cells()
                        .iter()
                        .map(|&i| {
                            let (row, col) = self.engine.board().coordinates(i);
                            format!("{},{}", row + 1, col + 1)
                        })
                        .collect();
                    output.push(format!("Winning line: {}", cells.join(" ")));
                }
                output.push(format!("{} ({}) Wins!", name, winner));
                output.push(format!("{} has won the game!", name));
                output.push(render_scoreboard(self.engine.scoreboard(), self.names()));
                output
            }
            MoveOutcome::Draw => {
                log!("{} filled the last cell", mark);
                vec![
                    render_board(self.engine.board()),
                    "It's a Draw!".to_string(),
                    "The game ended in a draw.".to_string(),
                    render_scoreboard(self.engine.scoreboard(), self.names()),
                ]
            }
        }
    }

    /// Plays the bot's move after the configured thinking delay.
    pub async fn play_bot_turn(&mut self) -> Vec<String> {
        if !self.bot_delay.is_zero() {
            tokio::time::sleep(self.bot_delay).await;
        }
        let mark = self.engine.current_mark();
        match self.engine.play_bot_move(self.difficulty) {
            Some((index, outcome)) => {
                let (row, col) = self.engine.board().coordinates(index);
                log!("Bot ({}) on {} played {},{}", mark, self.difficulty, row + 1, col + 1);
                let mut output = vec![format!(
                    "{} plays {},{}",
                    self.names().label(mark),
                    row + 1,
                    col + 1
                )];
                output.extend(self.describe(mark, outcome));
                output
            }
            None => Vec::new(),
        }
    }

    /// Handles one input line, then lets the bot answer if it is its turn.
    pub async fn handle_line(&mut self, line: &str) -> CommandResult {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => return CommandResult::line(message),
        };
        let mut result = self.handle_command(command);
        if !result.quit && self.is_bot_turn() {
            let bot_output = self.play_bot_turn().await;
            result.output.extend(bot_output);
        }
        result
    }
}
