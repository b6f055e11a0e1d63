use super::board::Board;
use super::types::{Mark, WinPattern};

/// First satisfied pattern in generation order.
pub fn check_win_with_line(board: &Board, patterns: &[WinPattern]) -> Option<(Mark, WinPattern)> {
    patterns.iter().find_map(|pattern| {
        let [a, b, c] = pattern.cells();
        let mark = board.get(a)?.mark()?;
        if board.get(b)?.mark() == Some(mark) && board.get(c)?.mark() == Some(mark) {
            Some((mark, *pattern))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board, patterns: &[WinPattern]) -> Option<Mark> {
    check_win_with_line(board, patterns).map(|(mark, _)| mark)
}

pub fn is_draw(board: &Board, patterns: &[WinPattern]) -> bool {
    board.is_full() && check_win(board, patterns).is_none()
}
