//! Board representation for the 11x11 marking game

pub mod grid;

#[cfg(test)]
mod tests;

// Re-exports
pub use grid::Grid;

/// Board size (11x11)
pub const BOARD_SIZE: usize = 11;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 121

/// Cell marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    Nought,
    Cross,
}

impl Mark {
    /// Get the other player's mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Nought => Mark::Cross,
            Mark::Cross => Mark::Nought,
            Mark::Empty => Mark::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }
}
