//! Two-player five-in-a-row marking game on a fixed 11x11 grid
//!
//! Two players alternately click empty cells to place their mark; the
//! first to line up five identical marks horizontally, vertically, or
//! diagonally wins, and a full grid with no line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: grid, marks, and positions
//! - [`rules`]: the win-line scan
//! - [`session`]: turn order, placement gating, terminal state
//! - [`ui`]: egui/eframe presentation layer
//!
//! The core never errors: clicks on occupied cells, clicks after the game
//! has ended, and out-of-range coordinates are all silent no-ops.
//!
//! # Quick Start
//!
//! ```
//! use gomoku_lite::{GameSession, Mark, Pos};
//!
//! let mut session = GameSession::new();
//! session.place(Pos::new(5, 5));
//!
//! assert_eq!(session.mark_at(Pos::new(5, 5)), Mark::Nought);
//! assert_eq!(session.next_mark(), Mark::Cross);
//! assert!(!session.is_over());
//! ```

pub mod board;
pub mod rules;
pub mod session;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Grid, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
pub use rules::{find_runs, Run, RUN_LEN};
pub use session::{GameSession, Outcome};
