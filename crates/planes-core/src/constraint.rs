//! Row/column hints printed on the puzzle card.

use crate::observation::{parse_interior, InteriorGrid};
use crate::{Board, CellValue, ParseError, Solution};
use serde::{Deserialize, Serialize};

/// Axis a connector must point along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Constraint {
    Vertical,
    Horizontal,
}

impl Constraint {
    /// Whether a finished board square satisfies this constraint.
    pub fn allows(self, value: CellValue) -> bool {
        match self {
            Constraint::Vertical => {
                matches!(value, CellValue::Up | CellValue::Down | CellValue::Air)
            }
            Constraint::Horizontal => {
                matches!(value, CellValue::Left | CellValue::Right | CellValue::Air)
            }
        }
    }
}

/// Optional constraint per interior square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstraintGrid {
    cells: InteriorGrid<Constraint>,
}

impl ConstraintGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, row: usize, col: usize, constraint: Option<Constraint>) {
        self.cells[row][col] = constraint;
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Constraint> {
        self.cells[row][col]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Parse symbols `.` (none), `|` (vertical) and `-` (horizontal).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let cells = parse_interior(text, |ch| match ch {
            '.' => Some(None),
            '|' => Some(Some(Constraint::Vertical)),
            '-' => Some(Some(Constraint::Horizontal)),
            _ => None,
        })?;
        Ok(Self { cells })
    }

    /// True if every set constraint holds on `board`.
    pub fn allows_board(&self, board: &Board) -> bool {
        self.cells.iter().enumerate().all(|(r, row)| {
            row.iter().enumerate().all(|(c, constraint)| {
                constraint.map_or(true, |k| k.allows(board.get(r + 1, c + 1)))
            })
        })
    }

    /// True if the finished board of `solution` satisfies every constraint.
    /// A solution that does not rebuild cleanly never passes.
    pub fn allows(&self, solution: &Solution) -> bool {
        solution.board().is_ok_and(|board| self.allows_board(&board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PieceCatalog, PieceType, Placement, Rotation};
    use CellValue::*;

    #[test]
    fn test_constraint_allows() {
        for v in [Up, Down, Air] {
            assert!(Constraint::Vertical.allows(v));
        }
        for v in [Left, Right, Glass, Any] {
            assert!(!Constraint::Vertical.allows(v));
        }
        for v in [Left, Right, Air] {
            assert!(Constraint::Horizontal.allows(v));
        }
        for v in [Up, Down, Glass, Any] {
            assert!(!Constraint::Horizontal.allows(v));
        }
    }

    #[test]
    fn test_grid_checks_interior_offset() {
        let mut board = Board::empty();
        board.set(1, 1, Left);

        let mut grid = ConstraintGrid::new();
        assert!(grid.is_empty());
        assert!(grid.allows_board(&board));

        grid.set(0, 0, Some(Constraint::Vertical));
        assert!(!grid.allows_board(&board));

        grid.set(0, 0, Some(Constraint::Horizontal));
        assert!(grid.allows_board(&board));

        // A vertical hint over an empty square is fine.
        grid.set(3, 3, Some(Constraint::Vertical));
        assert!(grid.allows_board(&board));
    }

    #[test]
    fn test_solution_filter() {
        let catalog = PieceCatalog::new();
        // Red L at (1,1): Right lands on board (2,1), interior (1,0).
        let solution = Solution::new(vec![Placement::new(
            PieceType::LRed,
            *catalog.orientation(PieceType::LRed, Rotation::Deg0),
            1,
            1,
        )]);

        let vertical = ConstraintGrid::parse("..../|.../..../....").unwrap();
        assert!(!vertical.allows(&solution));

        let horizontal = ConstraintGrid::parse("..../-.../..../....").unwrap();
        assert!(horizontal.allows(&solution));

        // Glass squares are cleared before checking, so a vertical hint
        // over the L's glass passes.
        let over_glass = ConstraintGrid::parse("|.../..../..../....").unwrap();
        assert!(over_glass.allows(&solution));
    }

    #[test]
    fn test_turned_piece_passes_vertical() {
        let catalog = PieceCatalog::new();
        // Red L turned 90: [[Down, Glass], [Glass, Air]]
        let solution = Solution::new(vec![Placement::new(
            PieceType::LRed,
            *catalog.orientation(PieceType::LRed, Rotation::Deg90),
            2,
            2,
        )]);
        let vertical = ConstraintGrid::parse("..../.|../..../....").unwrap();
        assert!(vertical.allows(&solution));
    }
}
