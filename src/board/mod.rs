//! Board result model.
//!
//! Holds the 81 recognized digits in row-major order and the pipeline that
//! produces them from a board image.

pub mod reader;

pub use reader::{read_board, ReadError};

/// Cells per side of the board.
pub const BOARD_SIZE: usize = 9;

/// Total number of cells.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Blank-cell sentinel.
pub const BLANK: u8 = 0;

/// Recognized digits for the whole board.
///
/// Stored row-major: index `k` maps to row `k / 9`, column `k % 9`. Cell
/// values are 1..=9, or [`BLANK`] when no confident digit was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardDigits {
    cells: [u8; CELL_COUNT],
}

impl Default for BoardDigits {
    fn default() -> Self {
        Self::blank()
    }
}

impl BoardDigits {
    /// An all-blank board.
    pub fn blank() -> Self {
        Self {
            cells: [BLANK; CELL_COUNT],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * BOARD_SIZE + col]
    }

    pub fn set(&mut self, row: usize, col: usize, digit: u8) {
        debug_assert!(digit <= 9);
        self.cells[row * BOARD_SIZE + col] = digit;
    }

    /// Number of non-blank cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&d| d != BLANK).count()
    }

    /// Cells in row-major order.
    pub fn iter_row_major(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().copied()
    }
}

/// Renders the board as 9 lines of 9 characters, `.` for blank cells.
impl std::fmt::Display for BoardDigits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.get(row, col) {
                    BLANK => write!(f, ".")?,
                    d => write!(f, "{}", d)?,
                }
            }
            if row < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_board_is_empty() {
        let board = BoardDigits::blank();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.iter_row_major().count(), 81);
    }

    #[test]
    fn test_row_major_indexing() {
        let mut board = BoardDigits::blank();
        board.set(0, 0, 5);
        board.set(1, 1, 3);
        board.set(8, 8, 9);

        assert_eq!(board.get(0, 0), 5);
        assert_eq!(board.get(0, 1), BLANK);
        assert_eq!(board.filled_count(), 3);

        let digits: Vec<u8> = board.iter_row_major().collect();
        assert_eq!(digits[0], 5);
        assert_eq!(digits[10], 3); // row 1, col 1
        assert_eq!(digits[80], 9); // row 8, col 8
    }

    #[test]
    fn test_display_renders_rows() {
        let mut board = BoardDigits::blank();
        board.set(0, 0, 5);
        board.set(8, 8, 9);

        let text = board.to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0], "5........");
        assert_eq!(rows[8], "........9");
    }
}
