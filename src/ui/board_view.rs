//! Board rendering and click handling for the marking game GUI

use egui::{CornerRadius, CursorIcon, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Grid, Mark, Pos, BOARD_SIZE};
use crate::rules::Run;
use crate::session::GameSession;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Hover previews and clicks are only offered on empty cells while the
    /// game is in progress; the session re-checks everything anyway.
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Option<Pos> {
        let available_size = ui.available_size();
        let board_size = available_size.x.min(available_size.y);
        self.cell_size = board_size / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::ZERO, SCENE_BG);
        self.draw_grid(&painter);
        self.draw_marks(&painter, session.grid());

        let mut clicked_pos = None;

        if !session.is_over() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if session.grid().is_empty(pos) {
                        ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
                        self.draw_hover_preview(&painter, pos);

                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                }
            }
        }

        // Run overlays go on top of the marks
        self.draw_runs(&painter, session.runs());

        clicked_pos
    }

    /// Draw the interior grid lines between cells
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(self.cell_size * GRID_LINE_RATIO, GRID_LINE);
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let top = self.board_rect.min + Vec2::new(offset, 0.0);
            let bottom = self.board_rect.min + Vec2::new(offset, extent);
            painter.line_segment([top, bottom], stroke);

            // Horizontal line
            let left = self.board_rect.min + Vec2::new(0.0, offset);
            let right = self.board_rect.min + Vec2::new(extent, offset);
            painter.line_segment([left, right], stroke);
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, grid: &Grid) {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                let mark = grid.get(pos);

                if mark != Mark::Empty {
                    self.draw_mark(painter, pos, mark);
                }
            }
        }
    }

    /// Draw a single mark centered in its cell
    fn draw_mark(&self, painter: &Painter, pos: Pos, mark: Mark) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;

        match mark {
            Mark::Nought => {
                let stroke = Stroke::new(self.cell_size * NOUGHT_STROKE_RATIO, MARK_COLOR);
                painter.circle_stroke(center, radius - 2.0, stroke);
            }
            Mark::Cross => {
                let stroke = Stroke::new(self.cell_size * CROSS_STROKE_RATIO, MARK_COLOR);
                let arm = Vec2::splat(radius * std::f32::consts::FRAC_1_SQRT_2);
                painter.line_segment([center - arm, center + arm], stroke);
                let arm = Vec2::new(arm.x, -arm.y);
                painter.line_segment([center - arm, center + arm], stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Draw the translucent overlay on the hovered empty cell
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(HOVER_INSET);
        painter.rect_filled(rect, CornerRadius::ZERO, hover_fill());
    }

    /// Draw a thick line through every winning run
    fn draw_runs(&self, painter: &Painter, runs: &[Run]) {
        let stroke = Stroke::new(self.cell_size * RUN_LINE_RATIO, RUN_LINE);

        for run in runs {
            let start = self.cell_center(run.start);
            let end = self.cell_center(run.end);

            // Stretch a little past both end cells
            let dir = (end - start).normalized();
            let ext = dir * self.cell_size * RUN_STRETCH_RATIO;
            painter.line_segment([start - ext, end + ext], stroke);
        }
    }

    /// Screen rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(
                pos.col as f32 * self.cell_size,
                pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to a board position
    fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
