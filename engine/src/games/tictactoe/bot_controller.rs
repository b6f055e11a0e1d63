use crate::games::SessionRng;
use super::board::Board;
use super::types::{Cell, Difficulty, Mark, WinPattern};

/// Probability that a medium bot uses the block-or-win heuristic.
pub const MEDIUM_HEURISTIC_PROBABILITY: f64 = 0.5;

pub struct BotInput<'a> {
    pub board: &'a Board,
    pub patterns: &'a [WinPattern],
    pub current_mark: Mark,
}

/// Picks an empty cell for `input.current_mark`; `None` only on a full board.
///
/// `Hard` is the same one-ply block-or-win heuristic as the medium bot's
/// heuristic branch. There is no lookahead.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => {
            if rng.chance(MEDIUM_HEURISTIC_PROBABILITY) {
                calculate_block_or_win_move(input, rng)
            } else {
                calculate_random_move(input, rng)
            }
        }
        Difficulty::Hard => calculate_block_or_win_move(input, rng),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    rng.choose(&input.board.available_moves())
}

pub fn calculate_block_or_win_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let bot_mark = input.current_mark;

    if let Some(index) = find_completing_move(input.board, input.patterns, bot_mark) {
        return Some(index);
    }

    if let Some(index) = find_completing_move(input.board, input.patterns, bot_mark.opponent()) {
        return Some(index);
    }

    calculate_random_move(input, rng)
}

/// First pattern, in generation order, holding two `mark`s and one empty cell.
fn find_completing_move(board: &Board, patterns: &[WinPattern], mark: Mark) -> Option<usize> {
    patterns.iter().find_map(|pattern| {
        let mut owned = 0;
        let mut empty = None;
        for index in pattern.cells() {
            match board.get(index)? {
                Cell::Empty if empty.is_none() => empty = Some(index),
                Cell::Marked(m) if m == mark => owned += 1,
                _ => return None,
            }
        }
        if owned == 2 { empty } else { None }
    })
}
