use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use scrabble_solver::{
    fallback_lines, ranked_lines, Board, Direction, Error, Letter, Placement, Position, Scorer,
    Shelf, Solver, Wordlist, DEFAULT_WORDFILE,
};
use std::convert::TryFrom;
use std::process::ExitCode;
use std::time::Instant;

/// Find the best words to play on a scrabble board
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug output (-vv for trace output)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the words that can be played with the letters on the shelf
    Solve {
        /// The letters on the shelf (at most 7)
        #[arg(short, long)]
        shelf: String,

        /// Board file: a JSON 15x15 array of strings, or 15 lines of 15 characters
        #[arg(short, long)]
        board: Option<String>,

        /// Path to the wordlist, one word per line
        #[arg(short, long, default_value = DEFAULT_WORDFILE)]
        wordfile: String,

        /// Play a word on the board before solving, as word@row,col,direction
        #[arg(short, long)]
        play: Vec<String>,

        /// Maximum number of results to print
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Calculate the score of a word
    Score {
        word: String,

        /// Start square of the word as row,col (1-based)
        #[arg(short, long)]
        at: Option<String>,

        /// Direction of the word: horizontal or vertical
        #[arg(short, long, default_value = "horizontal")]
        direction: String,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

/// Parse `word@row,col,direction`
fn parse_play(play: &str) -> Result<(String, Placement), Error> {
    let (word, placement) = play
        .split_once('@')
        .ok_or_else(|| Error::InvalidPosition(String::from(play)))?;
    Ok((word.trim().to_lowercase(), placement.parse()?))
}

fn load_board(path: Option<&str>, plays: &[String]) -> Result<Board> {
    let mut board = match path {
        Some(path) => Board::from_file(path)?,
        None => Board::new(),
    };
    for play in plays {
        let (word, placement) = parse_play(play)?;
        let used = board
            .place_word(&word, placement)
            .with_context(|| format!("can not play \"{}\"", play))?;
        info!("played {} {}, new letters \"{}\"", word, placement, used);
    }
    Ok(board)
}

fn solve(
    shelf: &str,
    board: Option<&str>,
    wordfile: &str,
    plays: &[String],
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let shelf: Shelf = shelf.parse()?;
    if shelf.is_empty() {
        return Err(Error::EmptyShelf.into());
    }
    let board = load_board(board, plays)?;
    log::debug!("board:\n{}", board);
    let wordlist = Wordlist::from_file(wordfile)?;

    let now = Instant::now();
    let solver = Solver::from_board(shelf, &board, &wordlist);
    let limit = limit.unwrap_or(usize::MAX);
    if solver.anchors().is_empty() {
        let mut results = solver.fallback_results();
        results.truncate(limit);
        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for line in fallback_lines(&results) {
                println!("{}", line);
            }
        }
    } else {
        let mut results = solver.ranked_results();
        results.truncate(limit);
        if json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        } else {
            for line in ranked_lines(&results) {
                println!("{}", line);
            }
        }
    }
    info!("solved in {:?}", now.elapsed());
    Ok(())
}

/// Lowercase `word`, rejecting anything that is not a letter.
fn parse_word(word: &str) -> Result<String, Error> {
    word.trim()
        .chars()
        .map(|c| Letter::try_from(c).map(Letter::as_char))
        .collect()
}

fn score(word: &str, at: Option<&str>, direction: &str) -> Result<()> {
    let word = parse_word(word)?;
    let placement = match at {
        Some(at) => Some(Placement::new(
            at.parse::<Position>()?,
            direction.parse::<Direction>()?,
        )),
        None => None,
    };
    let points = Scorer::default().score(&word, placement);
    match placement {
        Some(placement) => println!("{} ({} points) {}", word, points, placement),
        None => println!("{} ({} points)", word, points),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Solve {
            shelf,
            board,
            wordfile,
            play,
            limit,
            json,
        } => solve(&shelf, board.as_deref(), &wordfile, &play, limit, json),
        Command::Score {
            word,
            at,
            direction,
        } => score(&word, at.as_deref(), &direction),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() -> Result<()> {
        let (word, placement) = parse_play("Cat@8,7,h")?;
        assert_eq!(word, "cat");
        assert_eq!(placement, Placement::new(Position::new(8, 7), Direction::Horizontal));
        assert!(matches!(parse_play("cat"), Err(Error::InvalidPosition(_))));
        assert!(matches!(parse_play("cat@8,7,x"), Err(Error::InvalidDirection(_))));
        Ok(())
    }

    #[test]
    fn test_parse_word() -> Result<()> {
        assert_eq!(parse_word(" Cat ")?, "cat");
        assert!(matches!(parse_word("c@t"), Err(Error::InvalidLetter('@'))));
        assert!(score("c@t", None, "horizontal").is_err());
        Ok(())
    }

    #[test]
    fn test_load_board() -> Result<()> {
        let plays = vec![String::from("cat@8,7,h"), String::from("ta@7,8,v")];
        let board = load_board(None, &plays)?;
        assert!(board.is_occupied(Position::new(7, 8)));
        assert!(board.is_occupied(Position::new(8, 9)));
        assert!(load_board(None, &[String::from("cat@8,7,h"), String::from("dog@8,7,h")]).is_err());
        Ok(())
    }

    #[test]
    fn test_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
