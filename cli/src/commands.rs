use std::str::FromStr;
use tictactoe_engine::tictactoe::{Difficulty, GridSize, Mark};

use crate::game_mode::GameMode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// Zero-based board index.
    Index(usize),
    /// One-based row and column.
    RowCol(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Place(MoveTarget),
    Undo,
    Restart,
    NewGame,
    Size(GridSize),
    Mode(GameMode),
    Difficulty(Difficulty),
    Name(Mark, String),
    History,
    ClearHistory,
    Score,
    Board,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row>,<col>          place a mark (1-based, e.g. 2,3)
  <index>              place a mark by cell index (0-based)
  undo                 take back the last move
  restart              clear the board, keep scores
  new                  clear the board and the scores
  size <3|4|5>         change grid size
  mode <two-player|vs-bot>
  difficulty <easy|medium|hard>
  name <x|o> [name]    rename a player (empty restores the default)
  history              show the move history
  clear-history        clear the move history
  score                show the scoreboard
  board                redraw the board
  help                 show this help
  quit                 exit";

impl FromStr for Command {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err("Empty command".to_string()),
            "undo" | "u" => Ok(Command::Undo),
            "restart" | "r" => Ok(Command::Restart),
            "new" => Ok(Command::NewGame),
            "size" => {
                let size: usize = rest
                    .parse()
                    .map_err(|_| format!("Invalid grid size '{}'", rest))?;
                GridSize::try_from(size)
                    .map(Command::Size)
                    .map_err(|e| e.to_string())
            }
            "mode" => rest.parse().map(Command::Mode),
            "difficulty" | "diff" => rest.parse().map(Command::Difficulty),
            "name" => parse_name(rest),
            "history" | "h" => Ok(Command::History),
            "clear-history" => Ok(Command::ClearHistory),
            "score" | "scores" => Ok(Command::Score),
            "board" | "b" => Ok(Command::Board),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => parse_target(input).map(Command::Place),
        }
    }
}

fn parse_name(rest: &str) -> Result<Command, String> {
    let (who, name) = match rest.split_once(char::is_whitespace) {
        Some((who, name)) => (who, name.trim()),
        None => (rest, ""),
    };
    let mark = match who.to_ascii_lowercase().as_str() {
        "x" => Mark::X,
        "o" => Mark::O,
        _ => return Err("Usage: name <x|o> [name]".to_string()),
    };
    Ok(Command::Name(mark, name.to_string()))
}

fn parse_target(input: &str) -> Result<MoveTarget, String> {
    if let Some((row, col)) = input.split_once(',') {
        let row: usize = row.trim().parse().map_err(|_| format!("Invalid row in '{}'", input))?;
        let col: usize = col.trim().parse().map_err(|_| format!("Invalid column in '{}'", input))?;
        if row == 0 || col == 0 {
            return Err("Rows and columns start at 1".to_string());
        }
        return Ok(MoveTarget::RowCol(row, col));
    }

    input
        .parse()
        .map(MoveTarget::Index)
        .map_err(|_| format!("Unknown command '{}', type 'help' for a list", input))
}
