use super::*;

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Nought.opponent(), Mark::Cross);
    assert_eq!(Mark::Cross.opponent(), Mark::Nought);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(5, 7);
    assert_eq!(pos.row, 5);
    assert_eq!(pos.col, 7);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(10, 10));
    assert!(Pos::is_valid(5, 5));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(11, 0));
    assert!(!Pos::is_valid(0, 11));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 11);
    assert_eq!(TOTAL_CELLS, 121);
}

#[test]
fn test_grid_starts_empty() {
    let grid = Grid::new();
    assert_eq!(grid.empty_count(), TOTAL_CELLS);
    assert!(!grid.is_full());
    assert!(grid.is_empty(Pos::new(0, 0)));
    assert!(grid.is_empty(Pos::new(10, 10)));
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new();
    let pos = Pos::new(3, 8);

    grid.set(pos, Mark::Cross);
    assert_eq!(grid.get(pos), Mark::Cross);
    assert!(!grid.is_empty(pos));
    assert_eq!(grid.empty_count(), TOTAL_CELLS - 1);

    // Neighbors are untouched
    assert_eq!(grid.get(Pos::new(3, 7)), Mark::Empty);
    assert_eq!(grid.get(Pos::new(4, 8)), Mark::Empty);
}

#[test]
fn test_grid_full() {
    let mut grid = Grid::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            grid.set(Pos::new(row, col), Mark::Nought);
        }
    }
    assert!(grid.is_full());
    assert_eq!(grid.empty_count(), 0);
}
