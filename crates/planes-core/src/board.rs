//! 6x6 board: a 4x4 play area surrounded by a one-square frame.

use crate::{CellValue, Collision, Pattern};
use serde::{Deserialize, Serialize};

/// Board edge length, frame included.
pub const BOARD_SIZE: usize = 6;
/// Edge length of the play area inside the frame.
pub const INTERIOR_SIZE: usize = 4;
/// Highest row/column a piece's top-left corner may sit on.
pub const MAX_ANCHOR: usize = BOARD_SIZE - 2;

/// Row-major 6x6 grid of cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[CellValue; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// All-`Air` board.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> CellValue {
        self.cells[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.cells[row][col] = value;
    }

    /// Iterate `(row, col, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, CellValue)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &v)| (r, c, v)))
    }

    /// True when every square of the outer ring is `Air`.
    pub fn is_frame_clear(&self) -> bool {
        let last = BOARD_SIZE - 1;
        (0..BOARD_SIZE).all(|i| {
            self.cells[0][i] == CellValue::Air
                && self.cells[last][i] == CellValue::Air
                && self.cells[i][0] == CellValue::Air
                && self.cells[i][last] == CellValue::Air
        })
    }

    /// Overlay a 2x2 pattern with its top-left corner at `(row, col)`.
    ///
    /// Returns the combined board, or the first collision found. `self` is
    /// left untouched either way.
    pub fn with_pattern(&self, pattern: &Pattern, row: usize, col: usize) -> Result<Board, Collision> {
        debug_assert!(row <= MAX_ANCHOR && col <= MAX_ANCHOR);
        let mut next = *self;
        for (dr, pattern_row) in pattern.iter().enumerate() {
            for (dc, &value) in pattern_row.iter().enumerate() {
                let (r, c) = (row + dr, col + dc);
                next.cells[r][c] = next.cells[r][c].overlay(value)?;
            }
        }
        Ok(next)
    }

    /// Replace every `Glass` square with `Air`.
    pub fn clear_glass(&mut self) {
        self.replace(|v| v == CellValue::Glass, CellValue::Air);
    }

    /// Replace every directional square with `Any`.
    pub fn erase_directions(&mut self) {
        self.replace(CellValue::is_directional, CellValue::Any);
    }

    /// Count of squares holding a connector, directional or `Any`.
    pub fn connector_count(&self) -> usize {
        self.iter()
            .filter(|&(_, _, v)| v.is_directional() || v == CellValue::Any)
            .count()
    }

    fn replace(&mut self, matches: impl Fn(CellValue) -> bool, with: CellValue) {
        for cell in self.cells.iter_mut().flatten() {
            if matches(*cell) {
                *cell = with;
            }
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|v| format!("{:^10}", v)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
