use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading a wordfile or a saved board
    #[error("File \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Character is not a letter `a` .. `z`
    #[error("Invalid letter '{0}'")]
    InvalidLetter(char),

    /// A line in the wordfile is not a lowercase word
    #[error("Invalid word \"{0}\" in wordlist")]
    InvalidWord(String),

    /// The shelf holds at most 7 letters
    #[error("Shelf \"{0}\" has {1} letters (max 7)")]
    ShelfTooLong(String, usize),

    /// No letters on the shelf
    #[error("Please enter letters on your shelf")]
    EmptyShelf,

    /// Direction label is not horizontal or vertical
    #[error("Invalid anchor direction: \"{0}\"")]
    InvalidDirection(String),

    /// Position is not a "row,col" pair
    #[error("Invalid position \"{0}\" (expect row,col)")]
    InvalidPosition(String),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// A board cell must be empty or hold a single letter
    #[error("Invalid board cell \"{0}\"")]
    InvalidCell(String),

    /// Error parsing bonus cell
    #[error("Invalid grid bonus cell: \"{0}\"")]
    GridParseError(String),

    /// Saved board is not a json array of rows
    #[error("Board could not be parsed: {0}")]
    BoardParseError(#[from] serde_json::Error),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at row={row}, col={col} does not fit")]
    PositionOutOfBounds { row: usize, col: usize, len: usize },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at row:{row}, col:{col}")]
    TileReplaceError { row: usize, col: usize },
}
