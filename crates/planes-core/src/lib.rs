//! Placement search and solution index for the six-piece planes puzzle.
//!
//! Six 2x2 pieces carrying connectors and glass are rotated and dropped onto
//! a 6x6 board so that nothing reaches the outer frame. The offline phase
//! enumerates every legal arrangement once ([`Searcher`]) and files each one
//! under two digests of its finished board ([`SolutionIndex`]). The online
//! phase turns a recognizer's partial view of the board ([`Observation`]) into
//! a key, fetches the bucket, and narrows it with the card's row/column hints
//! ([`ConstraintGrid`]).
//!
//! ```no_run
//! use planes_core::{PieceCatalog, Searcher, SolutionIndex, Observation};
//!
//! let catalog = PieceCatalog::new();
//! let solutions = Searcher::new(&catalog).find_all_solutions();
//! let index = SolutionIndex::build(&solutions).expect("search output rebuilds");
//!
//! let seen = Observation::parse("^.../..>./..../....").unwrap();
//! for solution in index.find_matches(&seen, None) {
//!     println!("{}", solution.render());
//! }
//! ```

mod board;
mod canonical;
mod cell;
mod constraint;
mod error;
mod index;
mod observation;
mod pieces;
mod search;
mod solution;
mod store;


pub use board::{Board, BOARD_SIZE, INTERIOR_SIZE, MAX_ANCHOR};
pub use canonical::{any_orientation_key, canonical_key, exact_key, CanonicalKey, HashMode};
pub use cell::CellValue;
pub use constraint::{Constraint, ConstraintGrid};
pub use error::{Collision, ParseError, StoreError, StoreResult};
pub use index::SolutionIndex;
pub use observation::Observation;
pub use pieces::{rotate_clockwise, Orientation, Pattern, PieceCatalog, PieceType, Rotation};
pub use search::{SearchStats, Searcher};
pub use solution::{Placement, Solution};
pub use store::{IndexLoader, SolutionStore, BOARD_TO_SOLUTION, DB_FILENAME, RAW_SOLUTIONS};
