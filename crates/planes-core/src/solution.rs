//! Placements, solutions, and rebuilding the finished board from them.

use crate::{Board, CellValue, Collision, Orientation, PieceType, MAX_ANCHOR};
use serde::{Deserialize, Serialize};

/// One piece, in one orientation, anchored by its top-left square.
///
/// Deserializing rejects anchors past [`MAX_ANCHOR`] and patterns that are
/// not the piece's shape for the stated rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StoredPlacement")]
pub struct Placement {
    pub piece: PieceType,
    pub orientation: Orientation,
    pub row: usize,
    pub col: usize,
}

/// Unchecked wire form of [`Placement`].
#[derive(Deserialize)]
struct StoredPlacement {
    piece: PieceType,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl TryFrom<StoredPlacement> for Placement {
    type Error = String;

    fn try_from(stored: StoredPlacement) -> Result<Self, Self::Error> {
        if stored.row > MAX_ANCHOR || stored.col > MAX_ANCHOR {
            return Err(format!(
                "{} anchored at ({}, {}) is off the board",
                stored.piece, stored.row, stored.col
            ));
        }
        if stored.orientation.cells != stored.piece.pattern(stored.orientation.rotation) {
            return Err(format!(
                "{} pattern does not match rotation {:?}",
                stored.piece, stored.orientation.rotation
            ));
        }
        Ok(Placement::new(
            stored.piece,
            stored.orientation,
            stored.row,
            stored.col,
        ))
    }
}

impl Placement {
    pub fn new(piece: PieceType, orientation: Orientation, row: usize, col: usize) -> Self {
        Self {
            piece,
            orientation,
            row,
            col,
        }
    }

    /// Overlay this placement onto `board`.
    pub fn apply(&self, board: &Board) -> Result<Board, Collision> {
        board.with_pattern(&self.orientation.cells, self.row, self.col)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rotated {}° at ({}, {})",
            self.piece,
            self.orientation.rotation.quarter_turns() * 90,
            self.row,
            self.col
        )
    }
}

/// Placements in the order the search committed them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    pub placements: Vec<Placement>,
}

impl Solution {
    pub fn new(placements: Vec<Placement>) -> Self {
        Self { placements }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Rebuild the finished board: overlay every placement onto an empty
    /// board, then turn leftover glass into air.
    pub fn board(&self) -> Result<Board, Collision> {
        let mut board = Board::empty();
        for placement in &self.placements {
            board = placement.apply(&board)?;
        }
        board.clear_glass();
        Ok(board)
    }

    /// Which piece covers each square, ignoring `Air` squares of a pattern.
    pub fn coverage(&self) -> [[Option<PieceType>; 6]; 6] {
        let mut covered = [[None; 6]; 6];
        for p in &self.placements {
            for (dr, row) in p.orientation.cells.iter().enumerate() {
                for (dc, value) in row.iter().enumerate() {
                    if *value != CellValue::Air {
                        covered[p.row + dr][p.col + dc] = Some(p.piece);
                    }
                }
            }
        }
        covered
    }

    /// Text rendering with one piece symbol per covered square.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in self.coverage() {
            let line: String = row
                .iter()
                .map(|p| p.map_or('.', PieceType::symbol))
                .collect();
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellValue::*, PieceCatalog, Rotation};

    #[test]
    fn test_empty_solution_rebuilds_empty_board() {
        let solution = Solution::default();
        assert!(solution.is_empty());
        assert_eq!(solution.board().unwrap(), Board::empty());
    }

    #[test]
    fn test_glass_overlapping_air_then_cleared() {
        let catalog = PieceCatalog::new();
        // Red L: [[Glass, Air], [Right, Glass]] at (1,1)
        let red = Placement::new(
            PieceType::LRed,
            *catalog.orientation(PieceType::LRed, Rotation::Deg0),
            1,
            1,
        );
        // Orange I turned 180: [[Air, Glass], [Air, Up]]; its glass lands on
        // the red L's air square (1,2).
        let orange = Placement::new(
            PieceType::IOrange,
            *catalog.orientation(PieceType::IOrange, Rotation::Deg180),
            1,
            1,
        );
        assert_eq!(orange.orientation.cells, [[Air, Glass], [Air, Up]]);

        let raw = orange.apply(&red.apply(&Board::empty()).unwrap());
        assert_eq!(
            raw.unwrap_err(),
            Collision {
                existing: Glass,
                incoming: Up
            },
            "second column overlaps the red L's glass"
        );

        let shifted = Placement { row: 0, ..orange };
        let solution = Solution::new(vec![red, shifted]);
        let board = solution.board().unwrap();
        assert_eq!(board.get(0, 2), Air, "glass cleared");
        assert_eq!(board.get(1, 2), Up);
        assert_eq!(board.get(1, 1), Air, "glass cleared");
        assert_eq!(board.get(2, 1), Right);
        assert_eq!(board.get(2, 2), Air, "glass cleared");
        assert!(board.iter().all(|(_, _, v)| v != Glass));
    }

    #[test]
    fn test_render_marks_covered_squares() {
        let catalog = PieceCatalog::new();
        let solution = Solution::new(vec![Placement::new(
            PieceType::IRed,
            *catalog.orientation(PieceType::IRed, Rotation::Deg0),
            2,
            3,
        )]);
        let text = solution.render();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[2], "...r..");
        assert_eq!(rows[3], "...r..");
        assert_eq!(rows[0], "......");
    }

    #[test]
    fn test_placement_display() {
        let catalog = PieceCatalog::new();
        let p = Placement::new(
            PieceType::LBlue,
            *catalog.orientation(PieceType::LBlue, Rotation::Deg270),
            3,
            1,
        );
        assert_eq!(p.to_string(), "L Blue rotated 270° at (3, 1)");
    }
}
