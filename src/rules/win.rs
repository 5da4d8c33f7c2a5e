//! Win condition scanning
//!
//! A run is five consecutive cells sharing one non-empty mark along a
//! straight line. Every cell is tried as the start of a run in four
//! directions, so a six-in-a-row shows up as two overlapping runs; the
//! caller gets all of them.

use crate::board::{Grid, Mark, Pos, BOARD_SIZE};

/// Cells in a winning run
pub const RUN_LEN: usize = 5;

/// Direction vectors for run scanning, anchored at the run's start cell
const DIRECTIONS: [(i32, i32); 4] = [
    (-1, 1), // up-right
    (0, 1),  // right
    (1, 1),  // down-right
    (1, 0),  // down
];

/// A completed run, from its start cell to its end cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: Pos,
    pub end: Pos,
}

/// Scan the whole grid and return every five-in-a-row found.
///
/// There may be zero, one, or several runs; a single placement can
/// complete two lines at once. The scan visits a fixed 121 x 4 anchor
/// set, cheap enough to rerun after every placement.
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let mut runs = Vec::new();

    for row in 0..BOARD_SIZE as i32 {
        for col in 0..BOARD_SIZE as i32 {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(run) = run_at(grid, row, col, dr, dc) {
                    runs.push(run);
                }
            }
        }
    }

    runs
}

/// Check one (anchor, direction) pair for `RUN_LEN` equal marks.
///
/// Steps are monotone on both axes, so in-bound endpoints imply every
/// intermediate cell is in bounds too.
fn run_at(grid: &Grid, row: i32, col: i32, dr: i32, dc: i32) -> Option<Run> {
    let end_row = row + dr * (RUN_LEN as i32 - 1);
    let end_col = col + dc * (RUN_LEN as i32 - 1);
    if !Pos::is_valid(end_row, end_col) {
        return None;
    }

    let start = Pos::new(row as u8, col as u8);
    let mark = grid.get(start);
    if mark == Mark::Empty {
        return None;
    }

    for i in 1..RUN_LEN as i32 {
        let cell = Pos::new((row + dr * i) as u8, (col + dc * i) as u8);
        if grid.get(cell) != mark {
            return None;
        }
    }

    Some(Run {
        start,
        end: Pos::new(end_row as u8, end_col as u8),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(u8, u8)], mark: Mark) -> Grid {
        let mut grid = Grid::new();
        for &(row, col) in cells {
            grid.set(Pos::new(row, col), mark);
        }
        grid
    }

    #[test]
    fn test_empty_grid_has_no_runs() {
        assert!(find_runs(&Grid::new()).is_empty());
    }

    #[test]
    fn test_four_in_row_is_not_a_run() {
        let grid = grid_with(&[(3, 2), (3, 3), (3, 4), (3, 5)], Mark::Nought);
        assert!(find_runs(&grid).is_empty());
    }

    #[test]
    fn test_horizontal_five() {
        let grid = grid_with(&[(3, 2), (3, 3), (3, 4), (3, 5), (3, 6)], Mark::Nought);
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(3, 2),
                end: Pos::new(3, 6),
            }]
        );
    }

    #[test]
    fn test_vertical_five() {
        let grid = grid_with(&[(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)], Mark::Cross);
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(2, 7),
                end: Pos::new(6, 7),
            }]
        );
    }

    #[test]
    fn test_diagonal_down_right_five() {
        let grid = grid_with(&[(1, 1), (2, 2), (3, 3), (4, 4), (5, 5)], Mark::Nought);
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(1, 1),
                end: Pos::new(5, 5),
            }]
        );
    }

    #[test]
    fn test_diagonal_up_right_five() {
        let grid = grid_with(&[(8, 1), (7, 2), (6, 3), (5, 4), (4, 5)], Mark::Cross);
        let runs = find_runs(&grid);
        // Anchored at the bottom-left cell of the diagonal
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(8, 1),
                end: Pos::new(4, 5),
            }]
        );
    }

    #[test]
    fn test_mixed_marks_break_a_run() {
        let mut grid = grid_with(&[(5, 0), (5, 1), (5, 3), (5, 4)], Mark::Nought);
        grid.set(Pos::new(5, 2), Mark::Cross);
        assert!(find_runs(&grid).is_empty());
    }

    #[test]
    fn test_six_in_row_reports_two_overlapping_runs() {
        let grid = grid_with(
            &[(2, 2), (2, 3), (2, 4), (2, 5), (2, 6), (2, 7)],
            Mark::Nought,
        );
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![
                Run {
                    start: Pos::new(2, 2),
                    end: Pos::new(2, 6),
                },
                Run {
                    start: Pos::new(2, 3),
                    end: Pos::new(2, 7),
                },
            ]
        );
    }

    #[test]
    fn test_run_at_board_edge() {
        let grid = grid_with(&[(6, 10), (7, 10), (8, 10), (9, 10), (10, 10)], Mark::Cross);
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(6, 10),
                end: Pos::new(10, 10),
            }]
        );
    }

    #[test]
    fn test_run_in_corner() {
        let grid = grid_with(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)], Mark::Nought);
        let runs = find_runs(&grid);
        assert_eq!(
            runs,
            vec![Run {
                start: Pos::new(0, 0),
                end: Pos::new(0, 4),
            }]
        );
    }

    #[test]
    fn test_crossing_runs_are_both_reported() {
        // Horizontal through (5,5) and a down-right diagonal ending there
        let mut grid = grid_with(&[(5, 1), (5, 2), (5, 3), (5, 4), (5, 5)], Mark::Nought);
        for i in 1..5u8 {
            grid.set(Pos::new(i, i), Mark::Nought);
        }
        let runs = find_runs(&grid);
        assert_eq!(runs.len(), 2);
        assert!(runs.contains(&Run {
            start: Pos::new(5, 1),
            end: Pos::new(5, 5),
        }));
        assert!(runs.contains(&Run {
            start: Pos::new(1, 1),
            end: Pos::new(5, 5),
        }));
    }

    #[test]
    fn test_opponent_cells_do_not_join_runs() {
        let mut grid = grid_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], Mark::Nought);
        grid.set(Pos::new(9, 4), Mark::Cross);
        assert!(find_runs(&grid).is_empty());
    }
}
