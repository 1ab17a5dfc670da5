//! Digit recognition for cell crops.
//!
//! This module provides:
//! - Tesseract engine and tessdata discovery (`setup`)
//! - Single-character OCR via the tesseract binary (`engine`)
//! - Cell cropping for the recognizer (`preprocess`)
//! - Digit extraction from raw OCR output (`extract`)

pub mod engine;
pub mod extract;
pub mod preprocess;
pub mod setup;

pub use engine::TesseractEngine;
pub use extract::digit_from_recognition;
pub use preprocess::crop_cell;

use anyhow::Result;
use image::GrayImage;

/// Raw result of recognizing one cell crop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recognition {
    /// Recognized text, possibly empty.
    pub text: String,
    /// Mean confidence in [0.0, 1.0].
    pub confidence: f32,
}

/// Boundary to the OCR engine.
///
/// Implemented by [`TesseractEngine`] for the real application and by stubs
/// in tests, so the board-reading pipeline can be exercised without a
/// tesseract install.
pub trait Recognizer {
    fn recognize(&self, cell: &GrayImage) -> Result<Recognition>;
}
