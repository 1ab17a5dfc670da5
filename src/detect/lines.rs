//! Grid-line detection via midline pixel scanning.
//!
//! The board center is crossed by every grid line exactly once per axis,
//! while the digit glyphs cluster near cell centers away from the exact
//! midlines. Scanning a single row and a single column through the center
//! therefore finds all lines without tripping over digits, as long as each
//! initial hit is confirmed by a run of further dark pixels.

use image::RgbaImage;

/// Number of grid boundaries expected on each axis (9 cells need 10 lines).
pub const LINES_PER_AXIS: usize = 10;

/// Scan axis, used in error reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Errors returned by the grid detector.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("expected {LINES_PER_AXIS} {axis} grid lines, found {found} - is a full board screenshot on the clipboard?")]
    LineCount { axis: Axis, found: usize },
}

/// Tuning parameters for the midline scan.
#[derive(Clone, Copy, Debug)]
pub struct DetectParams {
    /// Red-channel value below which a pixel counts as part of a grid line.
    pub dark_threshold: u8,
    /// How many pixels past the initial hit must also be dark.
    pub confirmation_run: u32,
    /// Pixels to skip after a confirmed line so a thick stroke counts once.
    /// Boards with line spacing under `line_skip + 1` pixels are mis-detected;
    /// that is a known limitation of the fixed skip.
    pub line_skip: u32,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            dark_threshold: 150,
            confirmation_run: 49,
            line_skip: 40,
        }
    }
}

/// Pixel offsets of the 10 grid boundaries on each axis.
///
/// Both vectors are exactly [`LINES_PER_AXIS`] long and strictly increasing;
/// the detector only returns them when that invariant holds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridLines {
    /// Column offsets of the vertical lines, left to right.
    pub vertical: Vec<u32>,
    /// Row offsets of the horizontal lines, top to bottom.
    pub horizontal: Vec<u32>,
}

/// Detects the grid lines of a sudoku board image.
///
/// Horizontal lines are found by walking rows top to bottom along the
/// vertical midline column; vertical lines by walking columns left to right
/// along the horizontal midline row. A hit only counts when the next
/// `confirmation_run` pixels (rightward for rows, downward for columns) are
/// dark too, which rules out digit strokes and speckle.
///
/// Fails with [`DetectError::LineCount`] unless exactly [`LINES_PER_AXIS`]
/// lines are found per axis. Pure function of the image and parameters, so
/// repeated calls on the same image yield identical results.
pub fn detect_grid_lines(img: &RgbaImage, params: &DetectParams) -> Result<GridLines, DetectError> {
    let (width, height) = img.dimensions();
    let mid_x = width / 2;
    let mid_y = height / 2;

    let horizontal = scan_axis(height, params, |y, k| {
        red_below(img, mid_x + k, y, params.dark_threshold)
    });
    let vertical = scan_axis(width, params, |x, k| {
        red_below(img, x, mid_y + k, params.dark_threshold)
    });

    if vertical.len() != LINES_PER_AXIS {
        return Err(DetectError::LineCount {
            axis: Axis::Vertical,
            found: vertical.len(),
        });
    }
    if horizontal.len() != LINES_PER_AXIS {
        return Err(DetectError::LineCount {
            axis: Axis::Horizontal,
            found: horizontal.len(),
        });
    }

    Ok(GridLines {
        vertical,
        horizontal,
    })
}

/// Walks one axis from 0 to `extent`, recording each confirmed line start.
///
/// `dark_at(pos, k)` probes the pixel `k` steps into the confirmation run at
/// scan position `pos`; `k == 0` is the midline pixel itself. After a
/// confirmed line the scan jumps ahead by `line_skip` so a stroke wider than
/// one pixel is recorded once.
fn scan_axis(extent: u32, params: &DetectParams, dark_at: impl Fn(u32, u32) -> bool) -> Vec<u32> {
    let mut found = Vec::new();
    let mut pos = 0;
    while pos < extent {
        if (0..=params.confirmation_run).all(|k| dark_at(pos, k)) {
            found.push(pos);
            pos += params.line_skip;
        }
        pos += 1;
    }
    found
}

/// True when the pixel exists and its red channel is below the threshold.
///
/// The red channel alone is a good grayscale proxy for black-on-white board
/// renderings. Out-of-range probes (a confirmation run leaving the image)
/// count as not dark.
fn red_below(img: &RgbaImage, x: u32, y: u32, threshold: u8) -> bool {
    x < img.width() && y < img.height() && img.get_pixel(x, y)[0] < threshold
}
