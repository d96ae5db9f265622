//! A scrabble solver library for Rust.
//! <br>
//! This crate finds the words you can play on a scrabble board with the letters on your shelf,
//! and ranks them by score.
//! It can use the `rayon` crate to match the anchors of a board in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by creating a board and placing the words that have been played so far.
//! The letters on the board give the *anchors*: the places where a new word can be attached,
//! with the room available before and after them.
//! A `Solver` matches every word of a `Wordlist` against the anchors and the shelf.
//! The wordlist must be in utf-8 and contain one word per line.
//!
//! # Basic usage
//!  ```
//! use scrabble_solver::{Board, Solver, Wordlist};
//!
//! let wordlist = Wordlist::from_words(&["rust", "rest", "rusty", "trust"])?;
//! let mut board = Board::default();
//! board.place_word("rust", "8,7,h".parse()?)?;
//! let solver = Solver::from_board("tyre".parse()?, &board, &wordlist);
//! for result in solver.ranked_results() {
//!     println!("{}", result);
//! }
//! println!("{}", board);
//! # Ok::<(), scrabble_solver::Error>(())
//! ```
//!
//! On an empty board there are no anchors. The words that can be made from the shelf alone
//! are then ranked by their letter values:
//! ```
//! use scrabble_solver::{Board, Solver, Wordlist};
//!
//! let wordlist = Wordlist::from_words(&["gate", "get", "ate", "tag", "dog"])?;
//! let solver = Solver::from_board("gate".parse()?, &Board::default(), &wordlist);
//! assert!(solver.anchored_playable_words().is_empty());
//! assert_eq!(solver.fallback_results()[0], ("gate", 5));
//! # Ok::<(), scrabble_solver::Error>(())
//! ```
//!
//! # About implementation
//! The dictionary is scanned once per anchor. A word is kept when it contains the anchor letters,
//! can be made from the shelf plus the letters on the board, and the anchor letters occur with
//! the required number of letters before and after them.
mod anchor;
mod board;
mod error;
mod grid;
mod letters;
mod matcher;
mod placement;
mod scorer;
mod solver;
mod tileset;
mod wordlist;

pub use anchor::{anchors, extract_anchors, Anchor, AnchorId, AnchorKind, LineKind, RelativeAnchor};
pub use board::{Board, Line, Square, State};
pub use error::Error;
pub use grid::{Bonus, Grid, N};
pub use letters::{is_playable, Letter, LetterCounts, Shelf, MAX_SHELF};
pub use matcher::{fits, fits_anchor, occurrences};
pub use placement::{Direction, Placement, Position, HORIZONTAL_LABEL, VERTICAL_LABEL};
pub use scorer::Scorer;
pub use solver::{fallback_lines, ranked_lines, AnchorMatches, RankedResult, Solver};
pub use tileset::TileSet;
pub use wordlist::{Wordlist, DEFAULT_WORDFILE};
