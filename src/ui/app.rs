//! Main application for the marking game GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};

use crate::board::Mark;
use crate::session::{GameSession, Outcome};

use super::board_view::BoardView;
use super::theme::*;

/// Main application: one session, one board view
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self {
            session: GameSession::new(),
            board_view: BoardView::default(),
        }
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the status bar with turn/outcome info and a New Game button
    fn render_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let status = match self.session.outcome() {
                    None => match self.session.next_mark() {
                        Mark::Cross => "Cross to move",
                        _ => "Nought to move",
                    },
                    Some(Outcome::Won(Mark::Cross)) => "Cross wins",
                    Some(Outcome::Won(_)) => "Nought wins",
                    Some(Outcome::Draw) => "Draw",
                };
                ui.label(RichText::new(status).size(16.0).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("New Game").clicked() {
                        log::info!("starting a new game");
                        self.session = GameSession::new();
                    }
                });
            });
        });
    }

    /// Render the board and feed clicks into the session
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(SCENE_BG).inner_margin(BOARD_MARGIN))
            .show(ctx, |ui| {
                if let Some(pos) = self.board_view.show(ui, &self.session) {
                    self.session.place(pos);
                }
            });
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_status_bar(ctx);
        self.render_board(ctx);
    }
}
