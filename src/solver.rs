//! Find the words that can be played with a shelf on a board, and rank them by score.
use crate::anchor::{Anchor, AnchorId};
use crate::board::Board;
use crate::letters::{LetterCounts, Shelf};
use crate::matcher::fits_anchor;
use crate::placement::Placement;
use crate::scorer::Scorer;
use crate::wordlist::Wordlist;
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

/// The words that can be built on one anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorMatches<'s> {
    pub id: AnchorId,
    pub anchor: &'s Anchor,
    /// Matching words, in wordlist order
    pub words: Vec<&'s str>,
}

/// A scored word, with the anchor it was built on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedResult {
    pub word: String,
    pub score: u32,
    pub anchor: AnchorId,
    pub placement: Placement,
}

impl fmt::Display for RankedResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({} points) {}", self.word, self.score, self.placement)
    }
}

/// Matches the words in a `Wordlist` against the shelf and the anchors of a board.
///
/// ## Example
/// ```
/// # use scrabble_solver::{Board, Solver, Wordlist, Error};
/// let wordlist = Wordlist::from_words(&["cat", "car", "scar", "rat"])?;
/// let mut board = Board::new();
/// board.place_word("cat", "8,7,h".parse()?)?;
/// let solver = Solver::from_board("sear".parse()?, &board, &wordlist);
/// let results = solver.ranked_results();
/// assert_eq!(results[0].to_string(), "scar (9 points) @ (8, 7) played vertically");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver<'a> {
    shelf: Shelf,
    anchors: Vec<Anchor>,
    wordlist: &'a Wordlist,
    scorer: Scorer,
}

impl<'a> Solver<'a> {
    /// Create a solver for `shelf` and `anchors`, that looks up words in `wordlist`.
    pub fn new(shelf: Shelf, anchors: Vec<Anchor>, wordlist: &'a Wordlist) -> Solver<'a> {
        Solver {
            shelf,
            anchors,
            wordlist,
            scorer: Scorer::default(),
        }
    }

    /// Create a solver for `shelf` and the anchors found on `board`.
    pub fn from_board(shelf: Shelf, board: &Board, wordlist: &'a Wordlist) -> Solver<'a> {
        Solver::new(shelf, board.anchors(), wordlist)
    }

    /// Specify the `scorer`, and return the modified solver.
    pub fn with_scorer(mut self, scorer: Scorer) -> Solver<'a> {
        self.scorer = scorer;
        self
    }

    pub fn shelf(&self) -> &Shelf {
        &self.shelf
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn wordlist(&self) -> &Wordlist {
        self.wordlist
    }

    pub fn scorer(&self) -> &Scorer {
        &self.scorer
    }

    /// All words that can be built from the shelf alone, in wordlist order.
    pub fn all_playable_words(&self) -> Vec<&'a str> {
        let available = LetterCounts::from(&self.shelf);
        self.wordlist
            .iter()
            .map(String::as_str)
            .filter(|word| available.can_supply(word))
            .collect()
    }

    /// The words that can be built on `anchor` with the letters on the shelf.
    fn anchor_words(&self, anchor: &Anchor) -> Vec<&'a str> {
        let letters = anchor.letters.as_str();
        let min_len = anchor.min_word_len();
        let available = self.shelf.counts_with(&anchor.board_letters());
        self.wordlist
            .iter()
            .map(String::as_str)
            .filter(|&word| word != letters && word.len() >= min_len && word.contains(letters))
            .filter(|word| available.can_supply(word))
            .filter(|word| fits_anchor(word, anchor))
            .collect()
    }

    fn matches<'s>(&'s self, (index, anchor): (usize, &'s Anchor)) -> Option<AnchorMatches<'s>> {
        let words = self.anchor_words(anchor);
        trace!("{} {}: {} words", AnchorId::new(index), anchor, words.len());
        if words.is_empty() {
            None
        } else {
            Some(AnchorMatches {
                id: AnchorId::new(index),
                anchor,
                words,
            })
        }
    }

    /// The words that can be played on each anchor, in anchor order.
    /// Anchors without any matching word are left out.
    #[cfg(feature = "rayon")]
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn anchored_playable_words(&self) -> Vec<AnchorMatches<'_>> {
        let matches: Vec<AnchorMatches<'_>> = self
            .anchors
            .par_iter()
            .enumerate()
            .filter_map(|item| self.matches(item))
            .collect();
        debug!("{} of {} anchors have matches", matches.len(), self.anchors.len());
        matches
    }

    /// The words that can be played on each anchor, in anchor order.
    /// Anchors without any matching word are left out.
    #[cfg(not(feature = "rayon"))]
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn anchored_playable_words(&self) -> Vec<AnchorMatches<'_>> {
        let matches: Vec<AnchorMatches<'_>> = self
            .anchors
            .iter()
            .enumerate()
            .filter_map(|item| self.matches(item))
            .collect();
        debug!("{} of {} anchors have matches", matches.len(), self.anchors.len());
        matches
    }

    /// Score all anchored words at the placement of their anchor, highest score first.
    /// Results with equal scores keep anchor order, then wordlist order.
    pub fn ranked_results(&self) -> Vec<RankedResult> {
        let mut results: Vec<RankedResult> = Vec::new();
        for AnchorMatches { id, anchor, words } in self.anchored_playable_words() {
            let placement = anchor.placement();
            results.extend(words.into_iter().map(|word| RankedResult {
                word: String::from(word),
                score: self.scorer.score(word, Some(placement)),
                anchor: id,
                placement,
            }));
        }
        results.sort_by(|a, b| b.score.cmp(&a.score));
        debug!("ranked {} results", results.len());
        results
    }

    /// Score the words playable from the shelf alone, without placement, highest score first.
    /// This is the result for a board without anchors.
    pub fn fallback_results(&self) -> Vec<(&'a str, u32)> {
        let mut results: Vec<(&str, u32)> = self
            .all_playable_words()
            .into_iter()
            .map(|word| (word, self.scorer.score(word, None)))
            .collect();
        results.sort_by(|a, b| b.1.cmp(&a.1));
        results
    }
}

/// Format ranked results as numbered lines, starting at 1.
pub fn ranked_lines(results: &[RankedResult]) -> Vec<String> {
    results
        .iter()
        .enumerate()
        .map(|(i, result)| format!("{}. {}", i + 1, result))
        .collect()
}

/// Format fallback results as `word (score points)` lines.
pub fn fallback_lines(results: &[(&str, u32)]) -> Vec<String> {
    results
        .iter()
        .map(|(word, score)| format!("{} ({} points)", word, score))
        .collect()
}
