//! Exhaustive backtracking enumeration of piece placements.
//!
//! Pieces are taken one at a time from the end of the remaining list. For
//! each piece every orientation is tried at every anchor `(0..=4, 0..=4)`.
//! A branch dies on the first collision, or as soon as the board stops being
//! frame-clear; the frame is checked after every placement, not only once all
//! pieces are down.

use crate::{Board, PieceCatalog, PieceType, Placement, Solution, MAX_ANCHOR};

/// Counters gathered during one enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards visited, including the empty starting board.
    pub nodes: u64,
    /// Candidates dropped because two solid squares overlapped.
    pub collisions: u64,
    /// Boards dropped because a solid square reached the frame.
    pub frame_violations: u64,
    pub solutions: u64,
}

impl SearchStats {
    fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.collisions += other.collisions;
        self.frame_violations += other.frame_violations;
        self.solutions += other.solutions;
    }
}

/// Mutable bookkeeping threaded through the recursion.
struct SearchState {
    remaining: Vec<PieceType>,
    placements: Vec<Placement>,
    found: Vec<Solution>,
    stats: SearchStats,
}

impl SearchState {
    fn new(remaining: Vec<PieceType>) -> Self {
        let depth = remaining.len();
        Self {
            remaining,
            placements: Vec::with_capacity(depth),
            found: Vec::new(),
            stats: SearchStats::default(),
        }
    }
}

/// Placement enumerator over a shared piece catalog.
pub struct Searcher<'a> {
    catalog: &'a PieceCatalog,
}

impl<'a> Searcher<'a> {
    pub fn new(catalog: &'a PieceCatalog) -> Self {
        Self { catalog }
    }

    /// Every legal arrangement of all six pieces.
    pub fn find_all_solutions(&self) -> Vec<Solution> {
        self.search(&PieceType::ALL)
    }

    /// Every legal arrangement of `pieces`, each used once.
    ///
    /// An empty list yields exactly one solution with no placements.
    pub fn search(&self, pieces: &[PieceType]) -> Vec<Solution> {
        self.search_with_stats(pieces).0
    }

    pub fn search_with_stats(&self, pieces: &[PieceType]) -> (Vec<Solution>, SearchStats) {
        let mut state = SearchState::new(pieces.to_vec());
        self.descend(&Board::empty(), &mut state);
        log::info!("found {} solutions", state.found.len());
        log::debug!("search stats: {:?}", state.stats);
        (state.found, state.stats)
    }

    /// Same result as [`Searcher::search`], split across `threads` workers.
    ///
    /// The first piece's legal placements are divided into contiguous shards;
    /// shard outputs are concatenated in order, so the solution list matches
    /// the sequential one exactly.
    pub fn search_parallel(&self, pieces: &[PieceType], threads: usize) -> Vec<Solution> {
        let mut remaining = pieces.to_vec();
        let Some(first) = remaining.pop() else {
            return self.search(pieces);
        };
        if threads <= 1 {
            return self.search(pieces);
        }

        let roots: Vec<(Placement, Board)> = self
            .candidates(first)
            .filter_map(|p| p.apply(&Board::empty()).ok().map(|b| (p, b)))
            .collect();
        let chunk = roots.len().div_ceil(threads).max(1);
        log::debug!(
            "sharding {} root placements of {} over {} threads",
            roots.len(),
            first,
            threads
        );

        let shards: Vec<(Vec<Solution>, SearchStats)> = std::thread::scope(|scope| {
            let handles: Vec<_> = roots
                .chunks(chunk)
                .map(|shard| {
                    let remaining = remaining.clone();
                    scope.spawn(move || {
                        let mut state = SearchState::new(remaining);
                        for (placement, board) in shard {
                            state.placements.push(*placement);
                            self.descend(board, &mut state);
                            state.placements.pop();
                        }
                        (state.found, state.stats)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| match h.join() {
                    Ok(shard) => shard,
                    Err(panic) => std::panic::resume_unwind(panic),
                })
                .collect()
        });

        let mut stats = SearchStats::default();
        let mut found = Vec::new();
        for (solutions, shard_stats) in shards {
            stats.merge(&shard_stats);
            found.extend(solutions);
        }
        log::info!("found {} solutions", found.len());
        log::debug!("search stats: {:?}", stats);
        found
    }

    /// All `orientation x row x col` candidates for one piece.
    fn candidates(&self, piece: PieceType) -> impl Iterator<Item = Placement> + 'a {
        let catalog: &'a PieceCatalog = self.catalog;
        catalog.orientations(piece).iter().flat_map(move |orientation| {
            (0..=MAX_ANCHOR).flat_map(move |row| {
                (0..=MAX_ANCHOR).map(move |col| Placement::new(piece, *orientation, row, col))
            })
        })
    }

    fn descend(&self, board: &Board, state: &mut SearchState) {
        state.stats.nodes += 1;
        if !board.is_frame_clear() {
            state.stats.frame_violations += 1;
            return;
        }

        let Some(piece) = state.remaining.pop() else {
            state.stats.solutions += 1;
            state.found.push(Solution::new(state.placements.clone()));
            return;
        };

        for candidate in self.candidates(piece) {
            match candidate.apply(board) {
                Ok(next) => {
                    state.placements.push(candidate);
                    self.descend(&next, state);
                    state.placements.pop();
                }
                Err(_) => state.stats.collisions += 1,
            }
        }

        state.remaining.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellValue;

    #[test]
    fn test_empty_piece_list_yields_trivial_solution() {
        let catalog = PieceCatalog::new();
        let (solutions, stats) = Searcher::new(&catalog).search_with_stats(&[]);
        assert_eq!(solutions, vec![Solution::default()]);
        assert_eq!(solutions[0].board().unwrap(), Board::empty());
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_single_piece_candidates_stay_off_frame() {
        let catalog = PieceCatalog::new();
        let solutions = Searcher::new(&catalog).search(&[PieceType::IRed]);

        // 9 fully interior anchors per orientation, plus the border anchors
        // where the piece's air column or row is the part on the frame.
        assert!(solutions.len() > 4 * 9);
        assert!(solutions.len() < 4 * 25);
        for s in &solutions {
            assert_eq!(s.len(), 1);
            assert!(s.board().unwrap().is_frame_clear());
        }
    }

    #[test]
    fn test_border_anchor_allowed_only_for_air_squares() {
        let catalog = PieceCatalog::new();
        let solutions = Searcher::new(&catalog).search(&[PieceType::IOrange]);
        let orientation = catalog.orientation(PieceType::IOrange, crate::Rotation::Deg0);
        assert_eq!(
            orientation.cells,
            [[CellValue::Down, CellValue::Air], [CellValue::Glass, CellValue::Air]]
        );

        let anchored = |row, col| {
            solutions.iter().any(|s| {
                let p = s.placements[0];
                p.orientation == *orientation && p.row == row && p.col == col
            })
        };
        // Right column is air, so the piece may hang over the right frame.
        assert!(anchored(1, 4));
        // Left column is solid, so it may not touch the left frame.
        assert!(!anchored(1, 0));
        assert!(!anchored(0, 1));
    }

    #[test]
    fn test_two_pieces_never_overlap() {
        let catalog = PieceCatalog::new();
        let solutions = Searcher::new(&catalog).search(&[PieceType::LRed, PieceType::LBlue]);
        assert!(!solutions.is_empty());
        for s in &solutions {
            // pieces are taken from the end of the list
            assert_eq!(s.placements[0].piece, PieceType::LBlue);
            assert_eq!(s.placements[1].piece, PieceType::LRed);
            let board = s.board().unwrap();
            assert!(board.is_frame_clear());
            assert_eq!(board.connector_count(), 2);
        }
    }

    #[test]
    fn test_parallel_matches_sequential_on_small_sets() {
        let catalog = PieceCatalog::new();
        let searcher = Searcher::new(&catalog);
        let pieces = [PieceType::IRed, PieceType::LGreen, PieceType::IOrange];
        let sequential = searcher.search(&pieces);
        for threads in [1, 2, 3, 7] {
            assert_eq!(searcher.search_parallel(&pieces, threads), sequential);
        }
        assert_eq!(searcher.search_parallel(&[], 4), vec![Solution::default()]);
    }
}
