//! Marking game GUI
//!
//! A small two-player five-in-a-row game on an 11x11 grid.

use gomoku_lite::ui::GomokuApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([620.0, 660.0])
            .with_min_inner_size([400.0, 440.0])
            .with_title("Gomoku Lite"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku Lite",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc)))),
    )
}
