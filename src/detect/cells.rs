//! Cell rectangle derivation from detected grid lines.
//!
//! Each of the 81 cells is the span between two adjacent grid lines on each
//! axis, shrunk inward by a fixed inset so the line stroke itself never
//! reaches the recognizer.

use crate::board::BOARD_SIZE;

use super::lines::GridLines;

/// Axis-aligned pixel rectangle with exclusive right/bottom bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

/// One cell of the 9x9 board.
///
/// `rect` is `None` when the grid spacing is smaller than twice the inset,
/// which would invert the rectangle. Callers treat such cells as blank
/// instead of cropping garbage.
#[derive(Clone, Copy, Debug)]
pub struct CellRegion {
    pub row: usize,
    pub col: usize,
    pub rect: Option<PixelRect>,
}

/// Derives the 81 cell rectangles from a successful line detection.
///
/// Cells are produced in row-major order (all of row 0, then row 1, ...);
/// the order defines the mapping back to board positions. Expects the
/// line vectors from [`super::detect_grid_lines`], which are exactly 10
/// entries each.
pub fn sample_cells(lines: &GridLines, inset: u32) -> Vec<CellRegion> {
    let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let left = lines.vertical[col] + inset;
            let top = lines.horizontal[row] + inset;
            let right = lines.vertical[col + 1].saturating_sub(inset);
            let bottom = lines.horizontal[row + 1].saturating_sub(inset);

            let rect = (right > left && bottom > top).then_some(PixelRect {
                left,
                top,
                right,
                bottom,
            });
            cells.push(CellRegion { row, col, rect });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn even_lines(spacing: u32) -> GridLines {
        let coords: Vec<u32> = (0..10).map(|i| i * spacing).collect();
        GridLines {
            vertical: coords.clone(),
            horizontal: coords,
        }
    }

    #[test]
    fn test_exactly_81_cells_row_major() {
        let cells = sample_cells(&even_lines(100), 7);
        assert_eq!(cells.len(), 81);

        for (k, cell) in cells.iter().enumerate() {
            assert_eq!(cell.row, k / 9);
            assert_eq!(cell.col, k % 9);
        }
    }

    #[test]
    fn test_inset_shrinks_all_sides() {
        let cells = sample_cells(&even_lines(100), 7);

        let first = cells[0].rect.unwrap();
        assert_eq!(first, PixelRect { left: 7, top: 7, right: 93, bottom: 93 });
        assert_eq!(first.width(), 86);
        assert_eq!(first.height(), 86);

        // Row 0, col 1 starts at the second vertical line
        let second = cells[1].rect.unwrap();
        assert_eq!(second.left, 107);
        assert_eq!(second.top, 7);

        let last = cells[80].rect.unwrap();
        assert_eq!(last, PixelRect { left: 807, top: 807, right: 893, bottom: 893 });
    }

    #[test]
    fn test_zero_inset_spans_line_to_line() {
        let cells = sample_cells(&even_lines(50), 0);
        let first = cells[0].rect.unwrap();
        assert_eq!(first, PixelRect { left: 0, top: 0, right: 50, bottom: 50 });
    }

    #[test]
    fn test_degenerate_spacing_is_flagged_not_inverted() {
        // 10px spacing with a 7px inset collapses every cell
        let cells = sample_cells(&even_lines(10), 7);
        assert_eq!(cells.len(), 81);
        assert!(cells.iter().all(|c| c.rect.is_none()));
    }

    #[test]
    fn test_uneven_lines_use_adjacent_pair() {
        let lines = GridLines {
            vertical: vec![0, 90, 210, 300, 400, 500, 600, 700, 800, 900],
            horizontal: (0..10).map(|i| i * 100).collect(),
        };
        let cells = sample_cells(&lines, 5);

        // Cell (0, 1) spans vertical lines 90..210
        let cell = cells[1].rect.unwrap();
        assert_eq!(cell.left, 95);
        assert_eq!(cell.right, 205);
    }
}
