use crate::placement::Position;
use crate::Error;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;
const Q: usize = 1 + N / 2;

/// A square with its (optional) letter or word bonus
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Bonus {
    NoBonus,
    /// The centre star, which doubles the word
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

use Bonus::{LetterBonus, NoBonus, Start, WordBonus};

const TW: Bonus = WordBonus(3);
const DW: Bonus = WordBonus(2);
const TL: Bonus = LetterBonus(3);
const DL: Bonus = LetterBonus(2);
const NB: Bonus = NoBonus;
const SS: Bonus = Start;

/// Upper left quarter of the standard board, including the centre row and column.
const DEFAULT_QUARTER_BOARD: [[Bonus; Q]; Q] = [
    [TW, NB, NB, DL, NB, NB, NB, TW],
    [NB, DW, NB, NB, NB, TL, NB, NB],
    [NB, NB, DW, NB, NB, NB, DL, NB],
    [DL, NB, NB, DW, NB, NB, NB, DL],
    [NB, NB, NB, NB, DW, NB, NB, NB],
    [NB, TL, NB, NB, NB, TL, NB, NB],
    [NB, NB, DL, NB, NB, NB, DL, NB],
    [TW, NB, NB, DL, NB, NB, NB, SS],
];

impl Bonus {
    /// Factor applied to the letter on this square
    pub fn letter_factor(self) -> u32 {
        match self {
            LetterBonus(n) => n,
            _ => 1,
        }
    }

    /// Factor applied to the whole word covering this square
    pub fn word_factor(self) -> u32 {
        match self {
            WordBonus(n) => n,
            Start => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for Bonus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Bonus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Bonus; N]; N];

/// The bonus squares of a scrabble board, 15x15 squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square at (8, 8) is the "start" square, and counts as a 2x word bonus.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// Create the standard scrabble grid
/// ## Example
/// ```
/// # use scrabble_solver::{Grid, Position};
/// let grid = Grid::default();
/// assert_eq!(grid.bonus(Position::new(1, 1)).to_string(), "3w");
/// ```
impl Default for Grid {
    fn default() -> Self {
        Grid::expand_quarter_board(&DEFAULT_QUARTER_BOARD)
    }
}

impl Grid {
    /// Create a symmetrical board by mirroring a quarter board
    /// horizontally and vertically
    fn expand_quarter_board(qb: &[[Bonus; Q]; Q]) -> Grid {
        let mut board = [[NoBonus; N]; N];
        for (i, row) in qb.iter().enumerate() {
            for (j, &val) in row.iter().enumerate() {
                board[i][j] = val;
                board[N - i - 1][j] = val;
                board[i][N - j - 1] = val;
                board[N - i - 1][N - j - 1] = val;
            }
        }
        Grid(board)
    }

    /// Get board squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Bonus::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Bonus`.
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = [[NoBonus; N]; N];
        for (i, row) in grid.iter().enumerate() {
            let row = row.as_ref();
            let squares = row
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<Bonus>, Error>>()?;
            if squares.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), squares.len()));
            }
            board[i].copy_from_slice(&squares);
        }
        Ok(Grid(board))
    }

    /// Bonus at 1-based `pos`. Squares outside the board have no bonus.
    pub fn bonus(&self, pos: Position) -> Bonus {
        pos.index().map_or(NoBonus, |(row, col)| self[row][col])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_default_grid() {
        let grid = Grid::default();
        let at = |row, col| grid.bonus(Position::new(row, col));
        for &(row, col) in &[(1, 1), (1, 8), (1, 15), (8, 1), (8, 15), (15, 1), (15, 8)] {
            assert_eq!(at(row, col), WordBonus(3), "TW at ({}, {})", row, col);
        }
        for &(row, col) in &[(2, 2), (5, 5), (11, 11), (14, 14), (2, 14), (11, 5)] {
            assert_eq!(at(row, col), WordBonus(2), "DW at ({}, {})", row, col);
        }
        for &(row, col) in &[(2, 6), (6, 14), (10, 2), (14, 10)] {
            assert_eq!(at(row, col), LetterBonus(3), "TL at ({}, {})", row, col);
        }
        for &(row, col) in &[(1, 4), (4, 15), (7, 7), (8, 12), (12, 8), (15, 12)] {
            assert_eq!(at(row, col), LetterBonus(2), "DL at ({}, {})", row, col);
        }
        assert_eq!(at(8, 8), Start);
        assert_eq!(at(8, 9), NoBonus);
        assert_eq!(at(16, 1), NoBonus);
    }

    #[test]
    fn test_bonus_count() {
        let grid = Grid::default();
        let count = |bonus| grid.iter().flatten().filter(|&&b| b == bonus).count();
        assert_eq!(count(WordBonus(3)), 8);
        assert_eq!(count(WordBonus(2)), 16);
        assert_eq!(count(LetterBonus(3)), 12);
        assert_eq!(count(LetterBonus(2)), 24);
        assert_eq!(count(Start), 1);
    }

    #[test]
    fn test_factors() {
        assert_eq!(Start.word_factor(), 2);
        assert_eq!(Start.letter_factor(), 1);
        assert_eq!(LetterBonus(3).letter_factor(), 3);
        assert_eq!(LetterBonus(3).word_factor(), 1);
        assert_eq!(WordBonus(3).word_factor(), 3);
        assert_eq!(NoBonus.word_factor(), 1);
    }

    #[test]
    fn test_roundtrip_strings() -> Result<()> {
        let grid = Grid::default();
        let strings = grid.to_strings();
        assert_eq!(strings[7], "3w -- -- 2l -- -- -- ss -- -- -- 2l -- -- 3w");
        assert_eq!(Grid::from_strings(&strings)?, grid);
        Ok(())
    }

    #[test]
    fn test_from_strings_errors() {
        let strings = Grid::default().to_strings();
        assert!(matches!(
            Grid::from_strings(&strings[1..]),
            Err(Error::InvalidRowCount(14))
        ));
        let mut bad = strings.clone();
        bad[3] = String::from("-- --");
        assert!(matches!(
            Grid::from_strings(&bad),
            Err(Error::InvalidRowLength(_, 2))
        ));
        bad[3] = strings[3].replace("2w", "4w");
        assert!(matches!(
            Grid::from_strings(&bad),
            Err(Error::GridParseError(_))
        ));
    }
}
