use serde::{Deserialize, Serialize};

use super::types::Mark;

/// Session totals; survives board resets, cleared by a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
        }
    }

    pub fn record_draw(&mut self) {
        self.draws += 1;
    }

    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}
