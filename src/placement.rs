use crate::grid::N;
use crate::Error;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const HORIZONTAL_LABEL: &str = "played horizontally";
pub const VERTICAL_LABEL: &str = "played vertically";

/// A square on the board, with 1-based `row` and `col`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Check if the position lies on the 15x15 board.
    pub fn is_on_board(&self) -> bool {
        (1..=N).contains(&self.row) && (1..=N).contains(&self.col)
    }

    /// Return the 0-based (row, col) index, or None if off the board.
    pub fn index(&self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row - 1, self.col - 1))
        } else {
            None
        }
    }

    /// The position `n` squares further along `direction`.
    pub fn step(&self, direction: Direction, n: usize) -> Position {
        match direction {
            Direction::Horizontal => Position::new(self.row, self.col + n),
            Direction::Vertical => Position::new(self.row + n, self.col),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parse "row,col", optionally wrapped in parentheses: `8,8` or `(8, 8)`.
impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::InvalidPosition(String::from(s));
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        let pos = Position::new(row, col);
        if !pos.is_on_board() {
            return Err(err());
        }
        Ok(pos)
    }
}

/// The direction in which a word is played.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Label used when printing results
    pub fn label(self) -> &'static str {
        match self {
            Direction::Horizontal => HORIZONTAL_LABEL,
            Direction::Vertical => VERTICAL_LABEL,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "horizontal" | "across" | HORIZONTAL_LABEL => Ok(Direction::Horizontal),
            "v" | "vertical" | "down" | VERTICAL_LABEL => Ok(Direction::Vertical),
            _ => Err(Error::InvalidDirection(String::from(s))),
        }
    }
}

/// Start square and direction of a word on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub position: Position,
    pub direction: Direction,
}

impl Placement {
    pub fn new(position: Position, direction: Direction) -> Placement {
        Placement {
            position,
            direction,
        }
    }

    /// The squares covered by a word in this placement, starting at `position`.
    /// The iterator is unbounded: zip it with the letters of the word.
    pub fn squares(&self) -> impl Iterator<Item = Position> {
        let Placement {
            position,
            direction,
        } = *self;
        (0..).map(move |n| position.step(direction, n))
    }

    /// Check that a word of `len` letters stays on the board.
    pub fn fits(&self, len: usize) -> bool {
        len == 0 || self.position.step(self.direction, len - 1).is_on_board()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "@ {} {}", self.position, self.direction)
    }
}

/// Parse "row,col,direction", for example `8,8,h` or `3,12,vertical`.
impl FromStr for Placement {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (position, direction) = s
            .rsplit_once(',')
            .ok_or_else(|| Error::InvalidPosition(String::from(s)))?;
        Ok(Placement::new(position.parse()?, direction.parse()?))
    }
}
