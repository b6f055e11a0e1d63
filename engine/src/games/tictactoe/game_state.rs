use super::board::Board;
use super::types::{GameStatus, Mark, WinPattern};

/// Value copy of everything a move changes, restored by undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub winning_line: Option<WinPattern>,
}

/// Outcome of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    Win(Mark),
    Draw,
    Rejected(super::error::MoveError),
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        !matches!(self, MoveOutcome::Rejected(_))
    }
}
