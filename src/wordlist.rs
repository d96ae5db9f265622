use crate::Error;
use std::fmt;
use std::fs::read_to_string;
use std::slice;

/// The wordfile used when no other wordlist is given.
pub const DEFAULT_WORDFILE: &str = "wordlists/words.txt";

/// The dictionary: all words that may be played, in file order.
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    words: Vec<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.words.len(),
            self.wordfile
        )
    }
}

impl Wordlist {
    /// Read the wordlist from a file. The file must be encoded in utf-8 and
    /// have one word per line. Blank lines and lines starting with `#` are skipped.
    /// ## Errors
    /// Fails if the wordlist can not be read, or a word contains a non-letter.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = Wordlist::parse(&contents)?;
        wordlist.wordfile = String::from(wordfile);
        log::debug!("{}", wordlist);
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Errors
    /// If a word contains a non-letter.
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Wordlist, Error};
    /// let wordlist = Wordlist::from_words(&["Cat", "act"])?;
    /// assert!(wordlist.contains("cat"));
    /// assert_eq!(wordlist.len(), 2);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Wordlist, Error> {
        let words = words
            .iter()
            .map(|word| normalize(word))
            .collect::<Result<Vec<String>, Error>>()?;
        Ok(Wordlist {
            words,
            wordfile: String::new(),
        })
    }

    /// Parse the contents of a wordfile.
    pub fn parse(contents: &str) -> Result<Wordlist, Error> {
        let words = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(normalize)
            .collect::<Result<Vec<String>, Error>>()?;
        Ok(Wordlist {
            words,
            wordfile: String::new(),
        })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Linear search, the list is not sorted.
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

fn normalize(word: &str) -> Result<String, Error> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidWord(String::from(word)));
    }
    Ok(word.to_lowercase())
}
