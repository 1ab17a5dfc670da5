//! GUI rendering functions.
//!
//! Contains UI layout and component rendering logic.

use eframe::egui::{self, Color32, RichText, Vec2};

use crate::board::BOARD_SIZE;

use super::state::GuiState;

/// Side length of one board cell, in points.
const CELL_SIZE: f32 = 40.0;
/// Extra gap between the 3x3 boxes.
const BOX_GAP: f32 = 4.0;

/// Render the control row. Returns true when "Read clipboard" was clicked.
pub fn render_controls(ui: &mut egui::Ui) -> bool {
    let mut read_clicked = false;

    ui.horizontal(|ui| {
        if ui
            .button(RichText::new("📋 Read clipboard").size(16.0))
            .clicked()
        {
            read_clicked = true;
        }
    });

    read_clicked
}

/// Render the 9x9 digit grid.
pub fn render_board(ui: &mut egui::Ui, state: &GuiState) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    for row in 0..BOARD_SIZE {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            for col in 0..BOARD_SIZE {
                if col > 0 && col % 3 == 0 {
                    ui.add_space(BOX_GAP);
                }

                let (rect, _response) =
                    ui.allocate_exact_size(Vec2::splat(CELL_SIZE), egui::Sense::hover());
                ui.painter()
                    .rect_filled(rect, 2.0, Color32::from_gray(245));
                ui.painter().rect_stroke(
                    rect,
                    2.0,
                    egui::Stroke::new(1.0, Color32::from_gray(150)),
                );

                let digit = state.board.get(row, col);
                if digit != 0 {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        digit.to_string(),
                        egui::FontId::proportional(22.0),
                        Color32::BLACK,
                    );
                }
            }
        });
        if row < BOARD_SIZE - 1 && row % 3 == 2 {
            ui.add_space(BOX_GAP);
        }
    }
}

/// Render the status line.
pub fn render_status(ui: &mut egui::Ui, state: &GuiState) {
    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    let color = if state.status.is_error() {
        Color32::from_rgb(200, 0, 0)
    } else {
        Color32::from_rgb(0, 120, 200)
    };
    ui.label(RichText::new(state.status.status_text()).color(color));
}
