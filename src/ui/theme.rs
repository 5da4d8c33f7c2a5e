//! Theme constants for the GUI

use egui::Color32;

// Scene colors - pale green table with dark grid
pub const SCENE_BG: Color32 = Color32::from_rgb(204, 255, 230);
pub const GRID_LINE: Color32 = Color32::from_rgb(64, 64, 64);

// Both marks are drawn in the same dark ink
pub const MARK_COLOR: Color32 = Color32::from_rgb(51, 51, 51);

// Winning run overlay
pub const RUN_LINE: Color32 = Color32::from_rgb(153, 153, 153);

// Status bar text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(40, 45, 42);

pub fn hover_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, 153)
}

// Sizes, as ratios of the current cell size so the board scales with
// the window
pub const GRID_LINE_RATIO: f32 = 0.08;
pub const MARK_RADIUS_RATIO: f32 = 0.4;
pub const NOUGHT_STROKE_RATIO: f32 = 0.18;
pub const CROSS_STROKE_RATIO: f32 = 0.2;
pub const RUN_LINE_RATIO: f32 = 0.1;
pub const RUN_STRETCH_RATIO: f32 = 0.45;
pub const HOVER_INSET: f32 = 2.0;
pub const BOARD_MARGIN: f32 = 16.0;
