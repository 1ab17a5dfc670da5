//! Board reading pipeline: grid detection, cell sampling, per-cell OCR.
//!
//! Detection runs first and aborts the whole read on failure; no OCR call
//! is made for a board whose grid was not found. Recognition then visits
//! the 81 cells serially in row-major order, which is what maps results
//! back to board positions.

use image::RgbaImage;

use crate::config::Config;
use crate::detect::{detect_grid_lines, sample_cells, DetectError};
use crate::log;
use crate::ocr::{crop_cell, digit_from_recognition, Recognizer};

use super::BoardDigits;

/// Errors that abort a board read.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Detect(#[from] DetectError),
    #[error("OCR failed on cell ({row}, {col}): {message}")]
    Ocr {
        row: usize,
        col: usize,
        message: String,
    },
}

/// Reads the digits of a sudoku board image.
///
/// Low-confidence recognitions and degenerate cell rectangles are not
/// errors; those cells simply stay blank. An engine failure on any cell
/// aborts the read, since partial boards are worse than a retry.
pub fn read_board(
    img: &RgbaImage,
    config: &Config,
    recognizer: &impl Recognizer,
) -> Result<BoardDigits, ReadError> {
    let lines = detect_grid_lines(img, &config.detect_params())?;
    let cells = sample_cells(&lines, config.cell_inset);

    let mut board = BoardDigits::blank();
    for cell in &cells {
        let Some(rect) = cell.rect else {
            log(&format!(
                "Cell ({}, {}) collapsed to an empty rectangle; leaving it blank",
                cell.row, cell.col
            ));
            continue;
        };

        let crop = crop_cell(img, &rect);
        let rec = recognizer
            .recognize(&crop)
            .map_err(|e| ReadError::Ocr {
                row: cell.row,
                col: cell.col,
                message: e.to_string(),
            })?;

        if let Some(digit) = digit_from_recognition(&rec, config.min_confidence) {
            board.set(cell.row, cell.col, digit);
        }
    }

    Ok(board)
}
