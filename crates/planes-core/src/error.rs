//! Error types for the planes engine.

use crate::CellValue;
use thiserror::Error;

/// Two non-transparent cell values were overlaid on the same square.
///
/// Only ever produced while placing pieces; the search treats it as a
/// pruning signal and never returns it to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("can not overlay {existing:?} with {incoming:?}")]
pub struct Collision {
    pub existing: CellValue,
    pub incoming: CellValue,
}

/// Failures reading or writing the persisted solution store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("store is corrupt: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("store has no entry for `{0}`")]
    MissingKey(String),
    #[error("background store loader panicked")]
    LoaderPanicked,
}

/// Malformed observation or constraint text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected 4 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {len} cells, expected 4")]
    RowWidth { row: usize, len: usize },
    #[error("unknown symbol `{symbol}` at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

pub type StoreResult<T> = Result<T, StoreError>;
