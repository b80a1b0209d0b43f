//! What a recognizer reports about the play area.
//!
//! The recognizer only sees the 4x4 interior. Its grids are indexed from the
//! interior's top-left square, which is board square `(1, 1)`.

use crate::{canonical_key, Board, CanonicalKey, CellValue, HashMode, ParseError, INTERIOR_SIZE};

pub(crate) type InteriorGrid<T> = [[Option<T>; INTERIOR_SIZE]; INTERIOR_SIZE];

/// Parse four rows of four symbols. Rows are separated by newlines or `/`;
/// whitespace inside a row is ignored and blank rows are skipped.
///
/// `symbol` maps a character to `Some(cell)` (where `cell` may be `None` for
/// an unset square) or `None` if the character is unknown.
pub(crate) fn parse_interior<T: Copy>(
    text: &str,
    symbol: impl Fn(char) -> Option<Option<T>>,
) -> Result<InteriorGrid<T>, ParseError> {
    let rows: Vec<Vec<char>> = text
        .split(['\n', '/'])
        .map(|row| row.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    if rows.len() != INTERIOR_SIZE {
        return Err(ParseError::RowCount(rows.len()));
    }

    let mut grid = [[None; INTERIOR_SIZE]; INTERIOR_SIZE];
    for (r, row) in rows.iter().enumerate() {
        if row.len() != INTERIOR_SIZE {
            return Err(ParseError::RowWidth { row: r, len: row.len() });
        }
        for (c, &ch) in row.iter().enumerate() {
            grid[r][c] = symbol(ch).ok_or(ParseError::UnknownSymbol {
                symbol: ch,
                row: r,
                col: c,
            })?;
        }
    }
    Ok(grid)
}

/// Connector detections over the interior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Observation {
    cells: InteriorGrid<CellValue>,
}

impl Observation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a detection at interior square `(row, col)`.
    ///
    /// Only connectors (`Up`, `Right`, `Down`, `Left`, `Any`) are kept;
    /// anything else clears the square.
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        self.cells[row][col] = match value {
            CellValue::Air | CellValue::Glass => None,
            v => Some(v),
        };
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellValue> {
        self.cells[row][col]
    }

    /// Parse symbols `.` (nothing), `^ > v <` (directions) and `*` (any).
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let cells = parse_interior(text, |ch| match ch {
            '.' => Some(None),
            '^' => Some(Some(CellValue::Up)),
            '>' => Some(Some(CellValue::Right)),
            'v' | 'V' => Some(Some(CellValue::Down)),
            '<' => Some(Some(CellValue::Left)),
            '*' => Some(Some(CellValue::Any)),
            _ => None,
        })?;
        Ok(Self { cells })
    }

    /// Full 6x6 board with undetected squares as `Air`.
    pub fn to_board(&self) -> Board {
        let mut board = Board::empty();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, value) in row.iter().enumerate() {
                if let Some(v) = value {
                    board.set(r + 1, c + 1, *v);
                }
            }
        }
        board
    }

    /// `Exact` when every detection has a direction, otherwise
    /// `AnyOrientation`.
    pub fn hash_mode(&self) -> HashMode {
        let all_directional = self
            .cells
            .iter()
            .flatten()
            .flatten()
            .all(|v| v.is_directional());
        if all_directional {
            HashMode::Exact
        } else {
            HashMode::AnyOrientation
        }
    }

    pub fn key(&self) -> CanonicalKey {
        canonical_key(&self.to_board(), self.hash_mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellValue::*;

    #[test]
    fn test_parse_and_place_at_interior_offset() {
        let obs = Observation::parse("^...\n.>..\n..v.\n...<").unwrap();
        let board = obs.to_board();
        assert_eq!(board.get(1, 1), Up);
        assert_eq!(board.get(2, 2), Right);
        assert_eq!(board.get(3, 3), Down);
        assert_eq!(board.get(4, 4), Left);
        assert_eq!(board.connector_count(), 4);
        assert!(board.is_frame_clear());
    }

    #[test]
    fn test_parse_slash_separated_with_spaces() {
        let a = Observation::parse("^ . . . / . . . . / . . * . / . . . .").unwrap();
        assert_eq!(a.get(0, 0), Some(Up));
        assert_eq!(a.get(2, 2), Some(Any));
        assert_eq!(a.get(3, 3), None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Observation::parse("..../....").unwrap_err(), ParseError::RowCount(2));
        assert_eq!(
            Observation::parse("..../...../..../....").unwrap_err(),
            ParseError::RowWidth { row: 1, len: 5 }
        );
        assert_eq!(
            Observation::parse("..../..x./..../....").unwrap_err(),
            ParseError::UnknownSymbol {
                symbol: 'x',
                row: 1,
                col: 2
            }
        );
    }

    #[test]
    fn test_hash_mode_follows_confidence() {
        let mut obs = Observation::new();
        obs.set(0, 0, Up);
        obs.set(1, 1, Left);
        assert_eq!(obs.hash_mode(), HashMode::Exact);
        obs.set(2, 2, Any);
        assert_eq!(obs.hash_mode(), HashMode::AnyOrientation);
    }

    #[test]
    fn test_set_drops_non_connectors() {
        let mut obs = Observation::new();
        obs.set(0, 0, Glass);
        obs.set(0, 1, Air);
        assert_eq!(obs, Observation::new());
        assert_eq!(obs.to_board(), Board::empty());
    }
}
