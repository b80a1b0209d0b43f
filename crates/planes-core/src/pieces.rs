//! The six puzzle pieces and their rotations.

use crate::CellValue;
use serde::{Deserialize, Serialize};

/// A 2x2 block of cell values, row-major.
pub type Pattern = [[CellValue; 2]; 2];

/// Identity of a physical piece. Each one is used exactly once per solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PieceType {
    LRed,
    LGreen,
    LBlue,
    LBlack,
    IRed,
    IOrange,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::LRed,
        PieceType::LGreen,
        PieceType::LBlue,
        PieceType::LBlack,
        PieceType::IRed,
        PieceType::IOrange,
    ];

    /// Unrotated shape as printed on the piece.
    ///
    /// The red L, for example, reads
    /// ```text
    /// GLASS  AIR
    /// RIGHT  GLASS
    /// ```
    pub fn canonical_pattern(self) -> Pattern {
        use CellValue::*;
        match self {
            PieceType::LRed => [[Glass, Air], [Right, Glass]],
            PieceType::LGreen => [[Glass, Air], [Glass, Up]],
            PieceType::LBlue => [[Down, Air], [Glass, Glass]],
            PieceType::LBlack => [[Glass, Air], [Left, Glass]],
            PieceType::IRed => [[Left, Air], [Glass, Air]],
            PieceType::IOrange => [[Down, Air], [Glass, Air]],
        }
    }

    /// Canonical pattern turned clockwise by `rotation`.
    pub fn pattern(self, rotation: Rotation) -> Pattern {
        let mut cells = self.canonical_pattern();
        for _ in 0..rotation.quarter_turns() {
            cells = rotate_clockwise(&cells);
        }
        cells
    }

    /// Web color name used when drawing the piece.
    pub fn color_name(self) -> &'static str {
        match self {
            PieceType::LRed => "darkred",
            PieceType::LGreen => "green",
            PieceType::LBlue => "blue",
            PieceType::LBlack => "black",
            PieceType::IRed => "red",
            PieceType::IOrange => "yellow",
        }
    }

    /// RGB triple for [`PieceType::color_name`].
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceType::LRed => (139, 0, 0),
            PieceType::LGreen => (0, 128, 0),
            PieceType::LBlue => (0, 0, 255),
            PieceType::LBlack => (0, 0, 0),
            PieceType::IRed => (255, 0, 0),
            PieceType::IOrange => (255, 255, 0),
        }
    }

    /// Single-letter tag for text rendering.
    pub fn symbol(self) -> char {
        match self {
            PieceType::LRed => 'R',
            PieceType::LGreen => 'G',
            PieceType::LBlue => 'B',
            PieceType::LBlack => 'K',
            PieceType::IRed => 'r',
            PieceType::IOrange => 'o',
        }
    }
}

impl std::fmt::Display for PieceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceType::LRed => write!(f, "L Red"),
            PieceType::LGreen => write!(f, "L Green"),
            PieceType::LBlue => write!(f, "L Blue"),
            PieceType::LBlack => write!(f, "L Black"),
            PieceType::IRed => write!(f, "I Red"),
            PieceType::IOrange => write!(f, "I Orange"),
        }
    }
}

/// Clockwise rotation applied to a canonical pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rotation {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    pub fn quarter_turns(self) -> usize {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 1,
            Rotation::Deg180 => 2,
            Rotation::Deg270 => 3,
        }
    }
}

/// Turn a 2x2 pattern a quarter clockwise.
///
/// Square `(r, c)` of the result comes from `(1 - c, r)` of the input, and
/// every connector turns with it.
pub fn rotate_clockwise(pattern: &Pattern) -> Pattern {
    let mut out = [[CellValue::Air; 2]; 2];
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = pattern[1 - c][r].rotated();
        }
    }
    out
}

/// One rotated shape of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Orientation {
    pub rotation: Rotation,
    pub cells: Pattern,
}

/// Every orientation of every piece, built once and shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceCatalog {
    orientations: [[Orientation; 4]; 6],
}

impl Default for PieceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PieceCatalog {
    pub fn new() -> Self {
        let orientations = PieceType::ALL.map(|piece| {
            let mut cells = piece.canonical_pattern();
            Rotation::ALL.map(|rotation| {
                let orientation = Orientation { rotation, cells };
                cells = rotate_clockwise(&cells);
                orientation
            })
        });
        Self { orientations }
    }

    pub fn orientations(&self, piece: PieceType) -> &[Orientation; 4] {
        &self.orientations[piece as usize]
    }

    pub fn orientation(&self, piece: PieceType, rotation: Rotation) -> &Orientation {
        &self.orientations(piece)[rotation.quarter_turns()]
    }

    pub fn pieces(&self) -> &'static [PieceType] {
        &PieceType::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellValue::*;

    #[test]
    fn test_rotate_clockwise_remaps_squares() {
        let rotated = rotate_clockwise(&[[Glass, Air], [Right, Glass]]);
        // (0,0) <- (1,0), (0,1) <- (0,0), (1,0) <- (1,1), (1,1) <- (0,1)
        assert_eq!(rotated, [[Down, Glass], [Glass, Air]]);
    }

    #[test]
    fn test_four_rotations_restore_canonical() {
        for piece in PieceType::ALL {
            let canonical = piece.canonical_pattern();
            let mut pattern = canonical;
            for _ in 0..4 {
                pattern = rotate_clockwise(&pattern);
            }
            assert_eq!(pattern, canonical, "{} did not come back", piece);
        }
    }

    #[test]
    fn test_catalog_orientations() {
        let catalog = PieceCatalog::new();
        for piece in PieceType::ALL {
            let orientations = catalog.orientations(piece);
            assert_eq!(orientations[0].cells, piece.canonical_pattern());
            for (i, o) in orientations.iter().enumerate() {
                assert_eq!(o.rotation.quarter_turns(), i);
                assert_eq!(o.cells, piece.pattern(o.rotation));
                assert_eq!(rotate_clockwise(&o.cells), orientations[(i + 1) % 4].cells);
            }
        }
    }

    #[test]
    fn test_piece_contents_survive_rotation() {
        let catalog = PieceCatalog::new();
        for piece in PieceType::ALL {
            let count = |p: &Pattern, want: fn(CellValue) -> bool| {
                p.iter().flatten().filter(|v| want(**v)).count()
            };
            let canonical = piece.canonical_pattern();
            for o in catalog.orientations(piece) {
                assert_eq!(count(&o.cells, CellValue::is_directional), 1);
                assert_eq!(
                    count(&o.cells, |v| v == Glass),
                    count(&canonical, |v| v == Glass)
                );
            }
        }
    }

    #[test]
    fn test_orientation_lookup_by_rotation() {
        let catalog = PieceCatalog::new();
        let o = catalog.orientation(PieceType::IRed, Rotation::Deg180);
        assert_eq!(o.rotation, Rotation::Deg180);
        assert_eq!(o.cells, [[Air, Glass], [Air, Right]]);
    }
}
