use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use super::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// Supported board edge lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GridSize {
    #[default]
    Three,
    Four,
    Five,
}

impl GridSize {
    pub const ALL: [GridSize; 3] = [GridSize::Three, GridSize::Four, GridSize::Five];

    pub fn edge(self) -> usize {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
        }
    }

    pub fn cell_count(self) -> usize {
        self.edge() * self.edge()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = EngineError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(GridSize::Three),
            4 => Ok(GridSize::Four),
            5 => Ok(GridSize::Five),
            other => Err(EngineError::UnsupportedGridSize(other)),
        }
    }
}

impl TryFrom<u8> for GridSize {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        GridSize::try_from(value as usize)
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.edge() as u8
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.edge())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("Unknown difficulty '{}', expected easy|medium|hard", other)),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_active(self) -> bool {
        self == GameStatus::InProgress
    }
}

/// Three board indices that win when they all hold the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinPattern(pub [usize; 3]);

impl WinPattern {
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }
}
