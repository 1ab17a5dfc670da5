//! Grid-line detection and cell extraction.
//!
//! This module provides:
//! - Midline pixel scanning to locate the 10 grid lines on each axis (`lines`)
//! - Derivation of the 81 cell rectangles handed to the recognizer (`cells`)

pub mod cells;
pub mod lines;

pub use cells::{sample_cells, CellRegion, PixelRect};
pub use lines::{detect_grid_lines, Axis, DetectError, DetectParams, GridLines, LINES_PER_AXIS};
