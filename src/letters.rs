use crate::Error;
use multiset::HashMultiSet;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// Maximum number of letters on the shelf
pub const MAX_SHELF: usize = 7;

/// A single letter `a` .. `z`, as placed on the board or held on the shelf.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Filler for unused `ArrayVec` slots, not a meaningful letter.
impl Default for Letter {
    fn default() -> Self {
        Letter(b'a')
    }
}

impl Letter {
    pub fn as_char(self) -> char {
        self.0 as char
    }
}

/// Uppercase letters are accepted and stored lowercase.
impl TryFrom<char> for Letter {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_alphabetic() {
            Ok(Letter(c.to_ascii_lowercase() as u8))
        } else {
            Err(Error::InvalidLetter(c))
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A multiset of letters: how many of each letter are available.
#[derive(Debug, Clone)]
pub struct LetterCounts(HashMultiSet<char>);

impl Deref for LetterCounts {
    type Target = HashMultiSet<char>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl LetterCounts {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        let mut counts = HashMultiSet::new();
        for c in chars {
            counts.insert(c);
        }
        Self(counts)
    }

    /// Add all letters of `letters` to the multiset.
    pub fn extend(&mut self, letters: &str) {
        for c in letters.chars() {
            self.0.insert(c);
        }
    }

    /// Check if `word` can be assembled from these letters: for every distinct
    /// letter of `word`, the number needed must not exceed the number available.
    pub fn can_supply(&self, word: &str) -> bool {
        let needed = LetterCounts::from(word);
        needed
            .distinct_elements()
            .all(|c| needed.count_of(c) <= self.count_of(c))
    }
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::new()
    }
}

/// Count the occurrences of each letter in a letter sequence.
impl From<&str> for LetterCounts {
    fn from(letters: &str) -> Self {
        LetterCounts::from_chars(letters.chars())
    }
}

impl From<&String> for LetterCounts {
    fn from(letters: &String) -> Self {
        LetterCounts::from(letters.as_str())
    }
}

/// Use an explicit letter -> count mapping.
impl From<HashMap<char, usize>> for LetterCounts {
    fn from(map: HashMap<char, usize>) -> Self {
        let mut counts = HashMultiSet::new();
        for (c, n) in map {
            if n > 0 {
                counts.insert_times(c, n);
            }
        }
        Self(counts)
    }
}

impl From<&Shelf> for LetterCounts {
    fn from(shelf: &Shelf) -> Self {
        LetterCounts::from(shelf.as_str())
    }
}

/// Returns true if `word` can be played with the `available` letters.
///
/// `available` is either a letter sequence (such as the shelf), or a mapping
/// from letter to count.
/// ## Examples
/// ```
/// use scrabble_solver::is_playable;
/// assert!(is_playable("cat", "cat"));
/// assert!(is_playable("tat", "ttac"));
/// assert!(!is_playable("cats", "cat"));
/// ```
pub fn is_playable<L: Into<LetterCounts>>(word: &str, available: L) -> bool {
    available.into().can_supply(word)
}

/// The letters a player has in hand: at most 7 letters, stored lowercase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shelf(String);

impl Shelf {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The shelf letters pooled with `extra` letters that are already on the board.
    pub fn counts_with(&self, extra: &str) -> LetterCounts {
        let mut counts = LetterCounts::from(self);
        counts.extend(extra);
        counts
    }
}

impl FromStr for Shelf {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters = s
            .trim()
            .chars()
            .map(|c| Letter::try_from(c).map(Letter::as_char))
            .collect::<Result<String, Error>>()?;
        if letters.len() > MAX_SHELF {
            return Err(Error::ShelfTooLong(letters, s.trim().chars().count()));
        }
        Ok(Shelf(letters))
    }
}

impl fmt::Display for Shelf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
