use crate::anchor::{self, Anchor};
use crate::grid::N;
use crate::letters::Letter;
use crate::placement::{Placement, Position};
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::fs::read_to_string;

/// A square on the board: empty, or holding a placed letter
pub type Square = Option<Letter>;

/// One row (or column) of the board
pub type Line = [Square; N];

/// The 15 rows (or columns) of the board
pub type State = [Line; N];

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

/// The letters placed on a 15x15 scrabble board.
///
/// The state is kept both row by row (`horizontal`) and column by column
/// (`vertical`), so anchors can be found in both directions with the same code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    horizontal: State,
    vertical: State,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            horizontal: [[None; N]; N],
            vertical: [[None; N]; N],
        }
    }
}

fn parse_square(c: char) -> Result<Square, Error> {
    match c {
        ' ' | '.' => Ok(None),
        c => Letter::try_from(c).map(Some),
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Board {
        Board::default()
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters; a space or a `.` is an empty square.
    /// ## Errors
    /// If the list of strings has wrong dimensions or contains something other than letters.
    ///
    /// ## Examples
    /// ```
    /// use scrabble_solver::Board;
    /// let state = &[
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ".......cat.....",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// "...............",
    /// ];
    /// let board = Board::from_strings(state)?;
    /// assert_eq!(board.to_strings()[7], ".......cat.....");
    /// # Ok::<(), scrabble_solver::Error>(())
    /// ```
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Board, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = [[None; N]; N];
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let squares = row
                .chars()
                .map(parse_square)
                .collect::<Result<Vec<Square>, Error>>()?;
            if squares.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), squares.len()));
            }
            state[i].copy_from_slice(&squares);
        }
        Ok(Board::from_state(&state))
    }

    /// Create a board from a snapshot of 15x15 cells, each holding a single
    /// letter or an empty (or blank) string.
    /// ## Errors
    /// If the snapshot has wrong dimensions or a cell is not empty or a single letter.
    pub fn from_cells<S: AsRef<str>>(cells: &[Vec<S>]) -> Result<Board, Error> {
        if cells.len() != N {
            return Err(Error::InvalidRowCount(cells.len()));
        }
        let mut state = [[None; N]; N];
        for (i, row) in cells.iter().enumerate() {
            if row.len() != N {
                let repr = row
                    .iter()
                    .map(|cell| cell.as_ref())
                    .collect::<Vec<&str>>()
                    .join(",");
                return Err(Error::InvalidRowLength(repr, row.len()));
            }
            for (j, cell) in row.iter().enumerate() {
                let cell = cell.as_ref().trim();
                let mut chars = cell.chars();
                state[i][j] = match (chars.next(), chars.next()) {
                    (None, _) => None,
                    (Some(c), None) => Some(Letter::try_from(c)?),
                    _ => return Err(Error::InvalidCell(String::from(cell))),
                };
            }
        }
        Ok(Board::from_state(&state))
    }

    /// Load a board saved as a json array of 15 rows of 15 strings.
    /// ## Errors
    /// If the json can not be parsed, or has the wrong shape.
    pub fn from_json(json: &str) -> Result<Board, Error> {
        let cells: Vec<Vec<String>> = serde_json::from_str(json)?;
        Board::from_cells(&cells)
    }

    /// Read a board from `path`. The file is either a json snapshot (see
    /// [`from_json`](Board::from_json)) or 15 lines of text (see [`from_strings`](Board::from_strings)).
    /// ## Errors
    /// If the file can not be read or parsed.
    pub fn from_file(path: &str) -> Result<Board, Error> {
        let contents = read_to_string(path).map_err(|source| Error::ReadError {
            path: String::from(path),
            source,
        })?;
        if contents.trim_start().starts_with('[') {
            Board::from_json(&contents)
        } else {
            let rows: Vec<&str> = contents.lines().filter(|line| !line.is_empty()).collect();
            Board::from_strings(&rows)
        }
    }

    /// Set board state from a list of rows
    fn from_state(rows: &State) -> Board {
        let mut board = Board::default();
        board.set_state(rows);
        board
    }

    /// Set board state from a list of rows, update the columns
    pub fn set_state(&mut self, rows: &State) {
        self.horizontal = *rows;
        for i in 0..N {
            for j in 0..N {
                self.vertical[j][i] = self.horizontal[i][j];
            }
        }
    }

    /// Snapshot of the board as 15x15 cells, with "" for an empty square.
    pub fn to_cells(&self) -> Vec<Vec<String>> {
        self.horizontal
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| square.map_or_else(String::new, |l| l.to_string()))
                    .collect()
            })
            .collect()
    }

    /// Save the board as a json array of rows.
    /// ## Errors
    /// If serializing fails.
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(&self.to_cells())?)
    }

    /// Get the board rows as a vec of 15 strings, with `.` for an empty square
    pub fn to_strings(&self) -> Vec<String> {
        self.horizontal
            .iter()
            .map(|row| {
                row.iter()
                    .map(|square| square.map_or('.', Letter::as_char))
                    .collect()
            })
            .collect()
    }

    /// Return the board rows
    pub fn horizontal(&self) -> &State {
        &self.horizontal
    }

    /// Return the board columns
    pub fn vertical(&self) -> &State {
        &self.vertical
    }

    /// Return the letter at 1-based `pos`, or None if empty or outside the board.
    pub fn letter_at(&self, pos: Position) -> Option<Letter> {
        pos.index().and_then(|(row, col)| self.horizontal[row][col])
    }

    /// Check if the square at `pos` is occupied.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.letter_at(pos).is_some()
    }

    /// Check if no letter has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.horizontal.iter().flatten().all(Option::is_none)
    }

    /// All anchors on the board: first for every row, then for every column.
    pub fn anchors(&self) -> Vec<Anchor> {
        anchor::anchors(self)
    }

    /// Place `word` on the board.
    /// Returns the letters taken from the shelf, in order of use.
    /// Letters in `word` that are already on the board are not included.
    /// ## Errors
    /// - If `word` contains something other than letters.
    /// - If the word does not fit on the board.
    /// - If a letter would replace a different letter already on the board.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Error};
    /// let mut board = Board::new();
    /// let used = board.place_word("cat", "8,8,h".parse()?)?;
    /// assert_eq!(used, "cat");
    /// let used = board.place_word("act", "8,9,v".parse()?)?;
    /// assert_eq!(used, "ct");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place_word(&mut self, word: &str, placement: Placement) -> Result<String, Error> {
        let letters = word
            .chars()
            .map(Letter::try_from)
            .collect::<Result<Vec<Letter>, Error>>()?;
        let used = self.try_word(&letters, placement)?;
        let mut state = self.horizontal;
        for (&letter, pos) in letters.iter().zip(placement.squares()) {
            if let Some((row, col)) = pos.index() {
                state[row][col] = Some(letter);
            }
        }
        self.set_state(&state);
        Ok(used)
    }

    fn try_word(&self, letters: &[Letter], placement: Placement) -> Result<String, Error> {
        let Position { row, col } = placement.position;
        if !placement.position.is_on_board() || !placement.fits(letters.len()) {
            return Err(Error::PositionOutOfBounds {
                row,
                col,
                len: letters.len(),
            });
        }
        let mut used = String::new();
        for (&letter, pos) in letters.iter().zip(placement.squares()) {
            match self.letter_at(pos) {
                None => used.push(letter.as_char()),
                Some(placed) if placed == letter => {}
                Some(_) => {
                    return Err(Error::TileReplaceError {
                        row: pos.row,
                        col: pos.col,
                    })
                }
            }
        }
        Ok(used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Direction;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        ".......h.......",
        ".....cat.......",
        ".......s.......",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
        "...............",
    ];

    #[test]
    fn test_state() -> Result<()> {
        let board = Board::from_strings(TEST_STATE)?;
        assert!(board.is_occupied(Position::new(8, 6)));
        assert!(board.is_occupied(Position::new(7, 8)));
        assert!(!board.is_occupied(Position::new(1, 1)));
        assert!(!board.is_occupied(Position::new(0, 1)));
        assert_eq!(
            board.letter_at(Position::new(9, 8)).map(Letter::as_char),
            Some('s')
        );
        assert!(!board.is_empty());
        assert!(Board::new().is_empty());
        Ok(())
    }

    #[test]
    fn test_transpose() -> Result<()> {
        let board = Board::from_strings(TEST_STATE)?;
        let column: String = board.vertical()[7]
            .iter()
            .map(|square| square.map_or('.', Letter::as_char))
            .collect();
        assert_eq!(column, "......hts......");
        Ok(())
    }

    #[test]
    fn test_from_strings_errors() {
        assert!(matches!(
            Board::from_strings(&TEST_STATE[..3]),
            Err(Error::InvalidRowCount(3))
        ));
        let mut rows = TEST_STATE.to_vec();
        rows[2] = "...";
        assert!(matches!(
            Board::from_strings(&rows),
            Err(Error::InvalidRowLength(_, 3))
        ));
        rows[2] = "......3........";
        assert!(matches!(
            Board::from_strings(&rows),
            Err(Error::InvalidLetter('3'))
        ));
    }

    #[test]
    fn test_cells() -> Result<()> {
        let board = Board::from_strings(TEST_STATE)?;
        let cells = board.to_cells();
        assert_eq!(cells[7][5], "c");
        assert_eq!(cells[0][0], "");
        assert_eq!(Board::from_cells(&cells)?, board);

        let mut bad = cells.clone();
        bad[0][0] = String::from("ab");
        assert!(matches!(Board::from_cells(&bad), Err(Error::InvalidCell(_))));
        bad[0].pop();
        assert!(matches!(
            Board::from_cells(&bad),
            Err(Error::InvalidRowLength(_, 14))
        ));
        Ok(())
    }

    #[test]
    fn test_json() -> Result<()> {
        let board = Board::from_strings(TEST_STATE)?;
        let json = board.to_json()?;
        assert_eq!(Board::from_json(&json)?, board);
        assert!(matches!(
            Board::from_json("{\"rows\": 1}"),
            Err(Error::BoardParseError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_place_word() -> Result<()> {
        let mut board = Board::from_strings(TEST_STATE)?;
        let placement = Placement::new(Position::new(8, 6), Direction::Horizontal);
        let used = board.place_word("chat", placement);
        assert!(matches!(used, Err(Error::TileReplaceError { row: 8, col: 7 })));

        let used = board.place_word("cats", placement)?;
        assert_eq!(used, "s");
        assert_eq!(board.to_strings()[7], ".....cats......");
        assert_eq!(board.vertical()[8][7].map(Letter::as_char), Some('s'));
        Ok(())
    }

    #[test]
    fn test_place_word_crossing() -> Result<()> {
        let mut board = Board::new();
        board.place_word("cat", "8,8,h".parse()?)?;
        // the "c" would cover the "a" at (8, 9)
        let crossing = board.place_word("act", "7,9,v".parse()?);
        assert!(matches!(crossing, Err(Error::TileReplaceError { row: 8, col: 9 })));

        let used = board.place_word("act", "8,9,v".parse()?)?;
        assert_eq!(used, "ct");
        assert_eq!(board.letter_at(Position::new(10, 9)).map(Letter::as_char), Some('t'));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "PositionOutOfBounds { row: 8, col: 13, len: 4 }")]
    fn test_place_word_out_of_bounds() {
        let mut board = Board::new();
        let placement = Placement::new(Position::new(8, 13), Direction::Horizontal);
        board.place_word("rust", placement).unwrap();
    }

    #[test]
    fn test_display() -> Result<()> {
        let board = Board::from_strings(TEST_STATE)?;
        let repr = board.to_string();
        assert_eq!(repr.lines().count(), 15);
        assert_eq!(repr.lines().nth(6), Some(".......h......."));
        Ok(())
    }
}
