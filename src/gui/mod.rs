//! GUI module for the application.
//!
//! Provides a graphical interface using egui/eframe: a single button that
//! reads the clipboard and a 9x9 grid showing the recognized digits.

pub mod render;
pub mod state;

use eframe::egui::{self, Vec2};

use crate::board::read_board;
use crate::config::get_config;
use crate::ocr::TesseractEngine;

use state::{GuiState, RecognitionStatus};

/// Main GUI application struct.
pub struct GuiApp {
    /// Application state.
    state: GuiState,
    /// OCR engine, None when no tesseract install was found.
    engine: Option<TesseractEngine>,
}

impl GuiApp {
    /// Create a new GUI application instance.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = GuiState::default();

        let engine = match TesseractEngine::new(get_config()) {
            Ok(engine) => Some(engine),
            Err(e) => {
                crate::log(&format!("OCR engine unavailable: {}", e));
                state.status = RecognitionStatus::Failed(e.to_string());
                None
            }
        };

        Self { state, engine }
    }

    /// Handle the read-clipboard button.
    fn handle_read_clipboard(&mut self) {
        let Some(engine) = &self.engine else {
            self.state.status = RecognitionStatus::Failed(
                "Tesseract not found. Install Tesseract-OCR and restart.".to_string(),
            );
            return;
        };

        let img = match crate::clipboard::grab_board_image() {
            Ok(img) => img,
            Err(e) => {
                crate::log(&format!("Clipboard grab failed: {}", e));
                self.state.status = RecognitionStatus::Failed(e.to_string());
                return;
            }
        };
        crate::log(&format!(
            "Clipboard image: {}x{}",
            img.width(),
            img.height()
        ));

        match read_board(&img, get_config(), engine) {
            Ok(board) => {
                let filled = board.filled_count();
                crate::log(&format!("Board recognized with {} digits:\n{}", filled, board));
                self.state.board = board;
                self.state.status = RecognitionStatus::Recognized { filled };
            }
            Err(e) => {
                crate::log(&format!("Board read failed: {}", e));

                // Keep the rejected image around for threshold tuning
                let dump_path = crate::paths::get_debug_dir().join("last_board.png");
                if let Err(save_err) = img.save(&dump_path) {
                    crate::log(&format!("Could not save debug image: {}", save_err));
                } else {
                    crate::log(&format!("Saved {} for inspection", dump_path.display()));
                }

                self.state.status = RecognitionStatus::Failed(e.to_string());
            }
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sudoku Snap");
            ui.add_space(16.0);

            let read_clicked = render::render_controls(ui);
            if read_clicked {
                self.handle_read_clipboard();
            }

            render::render_board(ui, &self.state);
            render::render_status(ui, &self.state);
        });
    }
}

/// Run the GUI application.
/// This function blocks until the window is closed.
pub fn run_gui() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(Vec2::new(440.0, 560.0))
            .with_min_inner_size(Vec2::new(420.0, 540.0))
            .with_title("Sudoku Snap"),
        ..Default::default()
    };

    eframe::run_native(
        "Sudoku Snap",
        options,
        Box::new(|cc| Ok(Box::new(GuiApp::new(cc)))),
    )
}
