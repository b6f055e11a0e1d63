use std::fmt;

/// Why a move was declined. State is left untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidIndex { index: usize, cell_count: usize },
    CellOccupied { index: usize },
    GameInactive,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidIndex { index, cell_count } => {
                write!(f, "Cell {} is out of bounds (board has {} cells)", index, cell_count)
            }
            MoveError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
            MoveError::GameInactive => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    Move(MoveError),
    EmptyUndoStack,
    UnsupportedGridSize(usize),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Move(e) => write!(f, "{}", e),
            EngineError::EmptyUndoStack => write!(f, "Nothing to undo"),
            EngineError::UnsupportedGridSize(size) => {
                write!(f, "Unsupported grid size {}, expected 3, 4 or 5", size)
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Move(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MoveError> for EngineError {
    fn from(e: MoveError) -> Self {
        EngineError::Move(e)
    }
}
