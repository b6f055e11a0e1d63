use std::sync::OnceLock;

use super::types::{GridSize, WinPattern};

/// Length of a winning run on every board size.
pub const RUN_LENGTH: usize = 3;

static PATTERN_CACHE: [OnceLock<Vec<WinPattern>>; 3] = [const { OnceLock::new() }; 3];

/// Every run of three consecutive cells on an `n`x`n` board.
///
/// Order is rows, columns, down-right diagonals, down-left diagonals. Bots
/// scan patterns in this order, so it decides their tie-breaks.
pub fn generate(n: usize) -> Vec<WinPattern> {
    if n < RUN_LENGTH {
        return Vec::new();
    }

    let last_start = n - RUN_LENGTH;
    let mut patterns = Vec::new();

    for row in 0..n {
        for col in 0..=last_start {
            patterns.push(run(|k| row * n + col + k));
        }
    }

    for col in 0..n {
        for row in 0..=last_start {
            patterns.push(run(|k| col + (row + k) * n));
        }
    }

    for row in 0..=last_start {
        for col in 0..=last_start {
            patterns.push(run(|k| (row + k) * n + (col + k)));
        }
    }

    for row in 0..=last_start {
        for col in (RUN_LENGTH - 1)..n {
            patterns.push(run(|k| (row + k) * n + (col - k)));
        }
    }

    patterns
}

fn run(index_at: impl Fn(usize) -> usize) -> WinPattern {
    WinPattern([index_at(0), index_at(1), index_at(2)])
}

/// Cached patterns for a supported size, generated on first use.
pub fn patterns_for(size: GridSize) -> &'static [WinPattern] {
    let slot = match size {
        GridSize::Three => 0,
        GridSize::Four => 1,
        GridSize::Five => 2,
    };
    PATTERN_CACHE[slot].get_or_init(|| generate(size.edge()))
}
