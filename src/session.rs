//! Game session: turn alternation, placement gating, terminal state

use crate::board::{Grid, Mark, Pos};
use crate::rules::{find_runs, Run};

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark completed at least one run
    Won(Mark),
    /// The grid filled up with no run
    Draw,
}

/// A single game, from the first placement to the terminal state.
///
/// The session is driven by one frame loop: `place` on click, read
/// accessors every frame for drawing. Invalid placements (occupied cell,
/// out-of-range coordinate, game already over) are silent no-ops; the
/// session never errors. Once terminal it stays terminal; starting over
/// means constructing a fresh session.
pub struct GameSession {
    grid: Grid,
    next_mark: Mark,
    over: bool,
    runs: Vec<Run>,
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            next_mark: Mark::Nought,
            over: false,
            runs: Vec::new(),
        }
    }

    /// Try to place the next mark at `pos`.
    ///
    /// On success the turn flips and the whole grid is rescanned for runs;
    /// the session becomes terminal when any run exists or no empty cell
    /// remains. Coordinates are bounds-checked here rather than trusting
    /// the caller.
    pub fn place(&mut self, pos: Pos) {
        if self.over || !Pos::is_valid(pos.row as i32, pos.col as i32) {
            return;
        }
        if !self.grid.is_empty(pos) {
            return;
        }

        let mark = self.next_mark;
        self.grid.set(pos, mark);
        self.next_mark = mark.opponent();
        self.runs = find_runs(&self.grid);
        log::debug!("placed {:?} at ({}, {})", mark, pos.row, pos.col);

        if !self.runs.is_empty() || self.grid.is_full() {
            self.over = true;
            match self.outcome() {
                Some(Outcome::Won(winner)) => {
                    log::info!("game over: {:?} wins with {} run(s)", winner, self.runs.len())
                }
                _ => log::info!("game over: draw"),
            }
        }
    }

    /// Mark at a cell
    #[inline]
    pub fn mark_at(&self, pos: Pos) -> Mark {
        self.grid.get(pos)
    }

    /// Mark that the next successful placement will write
    #[inline]
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    /// Whether the session has reached its terminal state
    #[inline]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Runs found after the most recent placement
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Read-only grid access for the rendering layer
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Result of the game, or `None` while it is still in progress.
    ///
    /// The winner is read from the first run's start cell; simultaneous
    /// runs always belong to the mark that just moved.
    pub fn outcome(&self) -> Option<Outcome> {
        if !self.over {
            return None;
        }
        match self.runs.first() {
            Some(run) => Some(Outcome::Won(self.grid.get(run.start))),
            None => Some(Outcome::Draw),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
