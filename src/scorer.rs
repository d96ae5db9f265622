use crate::grid::Grid;
use crate::placement::Placement;
use crate::tileset::TileSet;
use std::cmp::Reverse;

/// Calculates word scores from the letter values and the bonus squares of the board.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    tileset: TileSet,
    grid: Grid,
}

impl Scorer {
    pub fn new(tileset: TileSet, grid: Grid) -> Scorer {
        Scorer { tileset, grid }
    }

    /// Use a custom bonus `grid`, and return the modified scorer.
    pub fn with_grid(mut self, grid: Grid) -> Scorer {
        self.grid = grid;
        self
    }

    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Calculate the score of `word`.
    ///
    /// Without a placement the score is the sum of the letter values.
    /// With a placement the letters cover consecutive squares from the start
    /// position, and the bonus squares apply: a letter bonus multiplies the value
    /// of the letter on it, word bonuses multiply the total (and compound).
    /// Squares past the edge of the board have no bonus.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Scorer, Error};
    /// let scorer = Scorer::default();
    /// assert_eq!(scorer.score("cat", None), 5);
    /// // the centre square doubles the word
    /// assert_eq!(scorer.score("cat", Some("8,8,h".parse()?)), 10);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score(&self, word: &str, placement: Option<Placement>) -> u32 {
        match placement {
            None => self.tileset.word_points(word),
            Some(placement) => self.placed_score(word, placement),
        }
    }

    fn placed_score(&self, word: &str, placement: Placement) -> u32 {
        let mut word_multiplier = 1;
        let mut total_points = 0;
        for (letter, pos) in word.chars().zip(placement.squares()) {
            let bonus = self.grid.bonus(pos);
            total_points += self.tileset.points(letter) * bonus.letter_factor();
            word_multiplier *= bonus.word_factor();
        }
        total_points * word_multiplier
    }

    /// Sort `words` by their score without placement, highest first.
    /// Words with equal scores keep their order.
    pub fn sort_by_score<S: AsRef<str>>(&self, words: &mut [S]) {
        words.sort_by_key(|word| Reverse(self.score(word.as_ref(), None)));
    }
}
