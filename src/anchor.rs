//! Find the anchors on a board: the letters already placed that a new word can
//! be attached to, with the space available before and after them.
use crate::board::{Board, Square};
use crate::grid::N;
use crate::letters::Letter;
use crate::placement::{Direction, Placement, Position};
#[cfg(feature = "flame_it")]
use flamer::flame;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;
use tinyvec::ArrayVec;

/// A board line is either a row or a column
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    Row,
    Column,
}

impl LineKind {
    /// Words along a row are played horizontally, along a column vertically.
    pub fn direction(self) -> Direction {
        match self {
            LineKind::Row => Direction::Horizontal,
            LineKind::Column => Direction::Vertical,
        }
    }

    /// Board position of square `i` in line `line_index`, both 0-based.
    fn position(self, line_index: usize, i: usize) -> Position {
        match self {
            LineKind::Row => Position::new(line_index + 1, i + 1),
            LineKind::Column => Position::new(i + 1, line_index + 1),
        }
    }
}

/// Placed `letters` that a word must contain at `offset` from the start of the anchor.
/// A negative offset refers to letters before the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeAnchor {
    pub letters: String,
    pub offset: isize,
}

impl RelativeAnchor {
    pub fn new<S: Into<String>>(letters: S, offset: isize) -> RelativeAnchor {
        RelativeAnchor {
            letters: letters.into(),
            offset,
        }
    }

    /// Check that `word` holds our letters at `start + offset`, fully inside the word.
    pub fn matches_at(&self, word: &[u8], start: usize) -> bool {
        let begin = start as isize + self.offset;
        if begin < 0 {
            return false;
        }
        let begin = begin as usize;
        let end = begin + self.letters.len();
        end <= word.len() && &word[begin..end] == self.letters.as_bytes()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorKind {
    /// Word must end before the next tile further along the line
    Bounded,
    /// Open space from the last tile in the line to the edge of the board
    OpenEnded,
}

/// A point on the board where a new word can be attached to placed letters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    /// Square of the first anchor letter
    pub position: Position,
    /// Direction of the line the anchor was found in
    pub direction: Direction,
    pub kind: AnchorKind,
    /// Placed letters the word is built around
    pub letters: String,
    /// Minimum number of letters before `letters`
    pub prefix_required: usize,
    /// Maximum number of letters before `letters`
    pub prefix_permitted: usize,
    /// Minimum number of letters after `letters`
    pub postfix_required: usize,
    /// Maximum number of letters after `letters`
    pub postfix_permitted: usize,
    pub relative_anchors: Vec<RelativeAnchor>,
}

impl Anchor {
    pub fn placement(&self) -> Placement {
        Placement::new(self.position, self.direction)
    }

    /// Shortest word that meets the prefix and postfix requirements
    pub fn min_word_len(&self) -> usize {
        self.letters.len() + self.prefix_required + self.postfix_required
    }

    /// All letters on the board the anchor refers to: its own letters followed by
    /// the letters of each relative anchor. These do not come from the shelf.
    pub fn board_letters(&self) -> String {
        let mut letters = self.letters.clone();
        for relative in &self.relative_anchors {
            letters.push_str(&relative.letters);
        }
        letters
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "'{}' {} prefix {}..={} postfix {}..={}",
            self.letters,
            self.placement(),
            self.prefix_required,
            self.prefix_permitted,
            self.postfix_required,
            self.postfix_permitted
        )?;
        for relative in &self.relative_anchors {
            write!(f, " ['{}' {:+}]", relative.letters, relative.offset)?;
        }
        Ok(())
    }
}

/// Fingerprint of an anchor: its index in the list of anchors for a board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct AnchorId(usize);

impl AnchorId {
    pub fn new(index: usize) -> AnchorId {
        AnchorId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// (letter, index) of the occupied squares in a line
type Occupied = ArrayVec<[(Letter, usize); N]>;

fn occupied(line: &[Square]) -> Occupied {
    line.iter()
        .enumerate()
        .filter_map(|(i, square)| square.map(|letter| (letter, i)))
        .collect()
}

/// The letters directly before square `i`, up to the first empty square.
fn prefix_run(line: &[Square], i: usize) -> String {
    let start = line[..i]
        .iter()
        .rposition(Option::is_none)
        .map_or(0, |p| p + 1);
    line[start..i].iter().flatten().map(|l| l.as_char()).collect()
}

/// Open space before the `k`th occupied square: up to the start of the line
/// for the first tile, else up to (but not touching) the previous tile.
fn space_before(occupied: &Occupied, k: usize) -> usize {
    let i = occupied[k].1;
    if k == 0 {
        i
    } else {
        (i - occupied[k - 1].1).saturating_sub(2)
    }
}

fn prefix_anchor(prefix: &str) -> Option<RelativeAnchor> {
    if prefix.is_empty() {
        None
    } else {
        Some(RelativeAnchor::new(prefix, -(prefix.len() as isize)))
    }
}

/// Find the anchors in one `line` of the board: row or column `line_index` (0-based).
///
/// For each tile, and each tile at or after it, the space between them gives a
/// bounded anchor; tiles in between become relative anchors. The last tile in
/// the line gives an open ended anchor if there is space after it.
/// Squares past the board size `N` are ignored.
/// ## Examples
/// ```
/// use std::convert::TryFrom;
/// use scrabble_solver::{extract_anchors, Letter, LineKind};
/// let mut line = [None; 15];
/// line[7] = Some(Letter::try_from('a')?);
/// let anchors = extract_anchors(&line, LineKind::Row, 7);
/// assert_eq!(anchors.len(), 1);
/// assert_eq!(anchors[0].prefix_permitted, 7);
/// assert_eq!(anchors[0].postfix_permitted, 7);
/// # Ok::<(), scrabble_solver::Error>(())
/// ```
#[cfg_attr(feature = "flame_it", flame)]
pub fn extract_anchors(line: &[Square], kind: LineKind, line_index: usize) -> Vec<Anchor> {
    let line = &line[..line.len().min(N)];
    let occupied = occupied(line);
    let direction = kind.direction();
    let mut anchors = Vec::new();

    for (k1, &(letter, i1)) in occupied.iter().enumerate() {
        let prefix = prefix_run(line, i1);
        let prefix_permitted = space_before(&occupied, k1);
        for (k2, &(_, i2)) in occupied.iter().enumerate().skip(k1) {
            let span = (i2 - i1).saturating_sub(2);
            // a tile at the end of the span is covered by a closer tile
            if span == 0 || line[i1 + span].is_some() {
                continue;
            }
            let mut relative_anchors: Vec<RelativeAnchor> = occupied[k1 + 1..k2]
                .iter()
                .map(|&(l, i)| RelativeAnchor::new(l.to_string(), (i - i1) as isize))
                .collect();
            relative_anchors.extend(prefix_anchor(&prefix));
            anchors.push(Anchor {
                position: kind.position(line_index, i1),
                direction,
                kind: AnchorKind::Bounded,
                letters: letter.to_string(),
                prefix_required: 0,
                prefix_permitted,
                postfix_required: 0,
                postfix_permitted: span,
                relative_anchors,
            });
        }
    }

    if let Some(&(letter, last)) = occupied.last() {
        if last + 1 < line.len() {
            let prefix = prefix_run(line, last);
            anchors.push(Anchor {
                position: kind.position(line_index, last),
                direction,
                kind: AnchorKind::OpenEnded,
                letters: letter.to_string(),
                prefix_required: 0,
                prefix_permitted: space_before(&occupied, occupied.len() - 1),
                postfix_required: 0,
                postfix_permitted: line.len() - last - 1,
                relative_anchors: prefix_anchor(&prefix).into_iter().collect(),
            });
        }
    }
    if !anchors.is_empty() {
        trace!("{:?} {}: {} anchors", kind, line_index, anchors.len());
    }
    anchors
}

/// All anchors on `board`: the anchors of every row, followed by those of every column.
/// A tile with space in both directions gives an anchor for each direction.
pub fn anchors(board: &Board) -> Vec<Anchor> {
    let rows = board
        .horizontal()
        .iter()
        .enumerate()
        .flat_map(|(i, row)| extract_anchors(row, LineKind::Row, i));
    let columns = board
        .vertical()
        .iter()
        .enumerate()
        .flat_map(|(i, column)| extract_anchors(column, LineKind::Column, i));
    let anchors: Vec<Anchor> = rows.chain(columns).collect();
    debug!("found {} anchors", anchors.len());
    anchors
}
