use crate::anchor::{Anchor, RelativeAnchor};

/// Start indices of all (possibly overlapping) occurrences of `sub` in `word`.
pub fn occurrences<'a>(word: &'a str, sub: &'a str) -> impl Iterator<Item = usize> + 'a {
    let (word, sub) = (word.as_bytes(), sub.as_bytes());
    let last = word.len().checked_sub(sub.len());
    last.into_iter()
        .flat_map(|last| 0..=last)
        .filter(move |&i| &word[i..i + sub.len()] == sub)
}

/// Check whether `letters` occur in `word` such that:
/// - the number of characters before them is in `prefix_required..=prefix_permitted`,
/// - the number of characters after them is in `postfix_required..=postfix_permitted`,
/// - every relative anchor is found at its offset from the start of `letters`.
///
/// Returns true if at least one occurrence meets all constraints.
/// ## Examples
/// ```
/// use scrabble_solver::fits;
/// assert!(fits("chats", "at", &[], 0, 2, 0, 2));
/// assert!(!fits("chats", "at", &[], 0, 1, 0, 2));
/// ```
pub fn fits(
    word: &str,
    letters: &str,
    relative_anchors: &[RelativeAnchor],
    prefix_required: usize,
    prefix_permitted: usize,
    postfix_required: usize,
    postfix_permitted: usize,
) -> bool {
    let bytes = word.as_bytes();
    occurrences(word, letters).any(|i| {
        let prefix = i;
        let postfix = word.len() - letters.len() - i;
        (prefix_required..=prefix_permitted).contains(&prefix)
            && (postfix_required..=postfix_permitted).contains(&postfix)
            && relative_anchors.iter().all(|r| r.matches_at(bytes, i))
    })
}

/// Check whether `word` can be built on `anchor`, see [`fits`].
pub fn fits_anchor(word: &str, anchor: &Anchor) -> bool {
    fits(
        word,
        &anchor.letters,
        &anchor.relative_anchors,
        anchor.prefix_required,
        anchor.prefix_permitted,
        anchor.postfix_required,
        anchor.postfix_permitted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occurrences() {
        assert_eq!(occurrences("banana", "ana").collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(occurrences("banana", "a").collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(occurrences("aaa", "aa").collect::<Vec<_>>(), vec![0, 1]);
        assert!(occurrences("at", "cat").next().is_none());
        assert!(occurrences("cat", "x").next().is_none());
    }

    #[test]
    fn test_fits_bounds() {
        // "at" in "chats" has 2 letters before and 1 after
        assert!(fits("chats", "at", &[], 0, 2, 0, 2));
        assert!(!fits("chats", "at", &[], 0, 2, 2, 4));
        assert!(!fits("chats", "at", &[], 3, 5, 0, 2));
        assert!(fits("chats", "at", &[], 2, 2, 1, 1));
        assert!(!fits("dog", "at", &[], 0, 15, 0, 15));
    }

    #[test]
    fn test_fits_any_occurrence() {
        // first "a" has 1 letter before, second "a" has 3
        assert!(fits("banana", "a", &[], 3, 3, 0, 2));
        assert!(!fits("banana", "a", &[], 2, 2, 0, 5));
    }

    #[test]
    fn test_fits_relative_anchors() {
        let relative = vec![RelativeAnchor::new("a", 2)];
        assert!(fits("coat", "c", &relative, 0, 0, 0, 4));
        assert!(!fits("cat", "c", &relative, 0, 0, 0, 4));
        // relative anchor past the end of the word
        assert!(!fits("co", "c", &relative, 0, 0, 0, 4));

        let before = vec![RelativeAnchor::new("ca", -2)];
        assert!(fits("cats", "t", &before, 0, 2, 0, 7));
        assert!(!fits("bats", "t", &before, 0, 2, 0, 7));
        // relative anchor before the start of the word
        assert!(!fits("ts", "t", &before, 0, 2, 0, 7));
    }

    #[test]
    fn test_fits_relative_anchor_per_occurrence() {
        // only the second "t" has an "e" right after it
        let relative = vec![RelativeAnchor::new("e", 1)];
        assert!(fits("tote", "t", &relative, 0, 3, 0, 3));
        assert!(!fits("tote", "t", &relative, 0, 1, 0, 3));
    }

    #[test]
    fn test_fits_anchor() {
        use crate::anchor::AnchorKind;
        use crate::placement::{Direction, Position};

        let anchor = Anchor {
            position: Position::new(8, 8),
            direction: Direction::Horizontal,
            kind: AnchorKind::OpenEnded,
            letters: String::from("t"),
            prefix_required: 0,
            prefix_permitted: 0,
            postfix_required: 0,
            postfix_permitted: 7,
            relative_anchors: vec![RelativeAnchor::new("ca", -2)],
        };
        assert!(!fits_anchor("cats", &anchor));
        let anchor = Anchor {
            prefix_permitted: 2,
            ..anchor
        };
        assert!(fits_anchor("cats", &anchor));
        assert!(fits_anchor("cattle", &anchor));
        assert!(!fits_anchor("scatter", &anchor));
    }
}
