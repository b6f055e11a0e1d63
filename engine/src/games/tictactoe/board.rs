use super::error::MoveError;
use super::types::{Cell, GridSize, Mark};

/// Row-major N*N board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
    size: GridSize,
}

impl Board {
    pub fn new(size: GridSize) -> Self {
        Self {
            cells: vec![Cell::Empty; size.cell_count()],
            size,
        }
    }

    /// Builds a board from `'X'`, `'O'` and anything else as empty.
    pub fn from_layout(size: GridSize, layout: &str) -> Option<Self> {
        let cells: Vec<Cell> = layout
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                'X' | 'x' => Cell::Marked(Mark::X),
                'O' | 'o' => Cell::Marked(Mark::O),
                _ => Cell::Empty,
            })
            .collect();
        if cells.len() != size.cell_count() {
            return None;
        }
        Some(Self { cells, size })
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn edge(&self) -> usize {
        self.size.edge()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn check_move(&self, index: usize) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::InvalidIndex {
                index,
                cell_count: self.cells.len(),
            }),
            Some(Cell::Marked(_)) => Err(MoveError::CellOccupied { index }),
            Some(Cell::Empty) => Ok(()),
        }
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        self.check_move(index)?;
        self.cells[index] = Cell::Marked(mark);
        Ok(())
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Marked(mark)).count()
    }

    /// Zero-based `(row, col)` of an index.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.edge(), index % self.edge())
    }

    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.edge() || col >= self.edge() {
            return None;
        }
        Some(row * self.edge() + col)
    }
}
