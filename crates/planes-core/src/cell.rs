//! The values a single board square can hold, and how two of them combine.

use crate::Collision;
use serde::{Deserialize, Serialize};

/// Contents of one square of the board or of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum CellValue {
    /// Nothing here. Identity of [`CellValue::overlay`].
    #[default]
    Air,
    Up,
    Right,
    Down,
    Left,
    /// Piece surface without a connector.
    Glass,
    /// A connector whose direction is unknown.
    Any,
}

impl CellValue {
    pub const ALL: [CellValue; 7] = [
        CellValue::Air,
        CellValue::Up,
        CellValue::Right,
        CellValue::Down,
        CellValue::Left,
        CellValue::Glass,
        CellValue::Any,
    ];

    /// Combine two values stacked on the same square.
    ///
    /// Air yields the other side. Anything else on both sides collides.
    pub fn overlay(self, other: CellValue) -> Result<CellValue, Collision> {
        match (self, other) {
            (CellValue::Air, v) => Ok(v),
            (v, CellValue::Air) => Ok(v),
            (existing, incoming) => Err(Collision { existing, incoming }),
        }
    }

    /// One quarter turn clockwise. Non-directional values are unchanged.
    pub fn rotated(self) -> CellValue {
        match self {
            CellValue::Up => CellValue::Right,
            CellValue::Right => CellValue::Down,
            CellValue::Down => CellValue::Left,
            CellValue::Left => CellValue::Up,
            CellValue::Air | CellValue::Glass | CellValue::Any => self,
        }
    }

    /// True for `Up`, `Right`, `Down` and `Left`.
    pub fn is_directional(self) -> bool {
        matches!(
            self,
            CellValue::Up | CellValue::Right | CellValue::Down | CellValue::Left
        )
    }

    /// Stable numeric code used when digesting boards.
    pub fn code(self) -> u8 {
        match self {
            CellValue::Air => 0,
            CellValue::Up => 1,
            CellValue::Right => 2,
            CellValue::Down => 3,
            CellValue::Left => 4,
            CellValue::Glass => 5,
            CellValue::Any => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CellValue::Air => "AIR",
            CellValue::Up => "UP",
            CellValue::Right => "RIGHT",
            CellValue::Down => "DOWN",
            CellValue::Left => "LEFT",
            CellValue::Glass => "GLASS",
            CellValue::Any => "ANY",
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}
