//! Board digests used as solution index keys.

use crate::Board;
use serde::{Deserialize, Serialize};

/// How much of a board a key captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashMode {
    /// Every square as-is, connector directions included.
    Exact,
    /// Connectors reduced to `Any`; only their positions count.
    AnyOrientation,
}

/// Hex-encoded BLAKE3 digest of a board's row-major cell codes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn digest(board: &Board) -> CanonicalKey {
    let mut hasher = blake3::Hasher::new();
    for (_, _, value) in board.iter() {
        hasher.update(&[value.code()]);
    }
    CanonicalKey(hasher.finalize().to_hex().to_string())
}

pub fn exact_key(board: &Board) -> CanonicalKey {
    digest(board)
}

pub fn any_orientation_key(board: &Board) -> CanonicalKey {
    let mut reduced = *board;
    reduced.erase_directions();
    digest(&reduced)
}

pub fn canonical_key(board: &Board, mode: HashMode) -> CanonicalKey {
    match mode {
        HashMode::Exact => exact_key(board),
        HashMode::AnyOrientation => any_orientation_key(board),
    }
}
