//! GUI application state.
//!
//! Tracks the last recognized board and the status to display.

use crate::board::BoardDigits;

/// Outcome of the last clipboard read, for display in the status line.
#[derive(Clone, Debug, Default)]
pub enum RecognitionStatus {
    /// Nothing read yet
    #[default]
    Idle,
    /// Board recognized; `filled` cells hold a digit
    Recognized { filled: usize },
    /// Clipboard grab, grid detection, or OCR failed
    Failed(String),
}

impl RecognitionStatus {
    /// Get display text for current status.
    pub fn status_text(&self) -> String {
        match self {
            Self::Idle => "Copy a board screenshot, then press Read clipboard".to_string(),
            Self::Recognized { filled } => format!("Recognized {} digits", filled),
            Self::Failed(msg) => format!("Error: {}", msg),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// GUI application state.
#[derive(Debug, Default)]
pub struct GuiState {
    /// Digits of the last successful read.
    pub board: BoardDigits,
    /// Current status for the status line.
    pub status: RecognitionStatus,
}
