//! Fixed-size grid of cell marks

use super::{Mark, Pos, BOARD_SIZE};

/// 11x11 grid of cell marks
#[derive(Debug, Clone)]
pub struct Grid {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get mark at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Mark {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Write a mark. Within a session, cells never revert to `Empty`.
    #[inline]
    pub fn set(&mut self, pos: Pos, mark: Mark) {
        self.cells[pos.row as usize][pos.col as usize] = mark;
    }

    /// Number of empty cells remaining
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&mark| mark == Mark::Empty)
            .count()
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
