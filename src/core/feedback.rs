//! Guess feedback: per-tile colors and the aggregated keyboard view
//!
//! Tiles are ordered `Absent < Present < Correct`, so the keyboard can keep the
//! best state seen for each letter with a plain `max`.

use super::Word;
use rustc_hash::FxHashMap;

/// Feedback for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    /// Gray: letter not in the target (or all its occurrences already accounted for)
    Absent,
    /// Yellow: letter in the target at another position
    Present,
    /// Green: letter at the exact position
    Correct,
}

/// Colored feedback for a whole guess, one tile per target position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Tile>);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Duplicate-aware two-pass algorithm:
    /// 1. Mark exact matches and consume those target positions
    /// 2. For every other guess letter, consume the first unconsumed target position
    ///    holding that letter (marking it present), or mark it absent
    ///
    /// # Examples
    /// ```
    /// use wordrun::core::{Feedback, Tile, Word};
    ///
    /// let guess = Word::new("aabbe").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     feedback.tiles(),
    ///     &[Tile::Correct, Tile::Absent, Tile::Absent, Tile::Absent, Tile::Correct]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess = guess.chars();
        let target = target.chars();
        let mut tiles = vec![Tile::Absent; target.len()];
        let mut consumed = vec![false; target.len()];

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                tiles[i] = Tile::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: first unconsumed occurrence, left to right
        for (i, &g) in guess.iter().enumerate() {
            if tiles.get(i) == Some(&Tile::Correct) {
                continue;
            }
            let slot = target
                .iter()
                .enumerate()
                .position(|(j, &t)| t == g && !consumed[j]);
            if let Some(j) = slot
                && i < tiles.len()
            {
                tiles[i] = Tile::Present;
                consumed[j] = true;
            }
        }

        Self(tiles)
    }

    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// True when every tile is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&t| t == Tile::Correct)
    }
}

/// Best feedback seen per letter across all guesses of a round
///
/// Rebuilt from the full guess history every time; never updated incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    best: FxHashMap<u8, Tile>,
}

impl KeyboardState {
    /// Keyboard rows as laid out on screen
    pub const ROWS: [&'static str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

    #[must_use]
    pub fn from_guesses(guesses: &[Word], target: &Word) -> Self {
        let mut best: FxHashMap<u8, Tile> = FxHashMap::default();
        for guess in guesses {
            let feedback = Feedback::calculate(guess, target);
            for (&letter, &tile) in guess.chars().iter().zip(feedback.tiles()) {
                best.entry(letter)
                    .and_modify(|seen| *seen = (*seen).max(tile))
                    .or_insert(tile);
            }
        }
        Self { best }
    }

    /// Best state for a letter, or `None` if it has not been typed this round
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<Tile> {
        self.best.get(&letter.to_ascii_lowercase()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, target: &str) -> Vec<Tile> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        Feedback::calculate(&guess, &target).tiles().to_vec()
    }

    /// Letters counted correct-or-present must equal min(count in guess, count in target)
    fn assert_letter_budget(guess: &str, target: &str) {
        let tiles = feedback(guess, target);
        for letter in b'a'..=b'z' {
            let in_guess = guess.bytes().filter(|&c| c == letter).count();
            let in_target = target.bytes().filter(|&c| c == letter).count();
            let marked = guess
                .bytes()
                .zip(&tiles)
                .filter(|&(c, &t)| c == letter && t != Tile::Absent)
                .count();
            assert_eq!(marked, in_guess.min(in_target), "{guess} vs {target}");
        }
        for (i, &tile) in tiles.iter().enumerate() {
            if tile == Tile::Correct {
                assert_eq!(guess.as_bytes()[i], target.as_bytes()[i]);
            }
        }
    }

    #[test]
    fn duplicate_guess_letters_do_not_double_count() {
        use Tile::{Absent, Correct};
        assert_eq!(
            feedback("aabbe", "apple"),
            vec![Correct, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn all_absent() {
        assert_eq!(feedback("bight", "crane"), vec![Tile::Absent; 5]);
    }

    #[test]
    fn perfect_match_is_solved() {
        let word = Word::new("crane").unwrap();
        assert!(Feedback::calculate(&word, &word).is_solved());
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        use Tile::{Absent, Correct, Present};
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            feedback("robot", "floor"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn speed_vs_erase() {
        use Tile::{Absent, Present};
        assert_eq!(
            feedback("speed", "erase"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn seven_letter_feedback() {
        use Tile::{Absent, Correct, Present};
        assert_eq!(
            feedback("balance", "battery"),
            vec![Correct, Correct, Absent, Absent, Absent, Absent, Present]
        );
    }

    #[test]
    fn letter_budget_holds_for_tricky_pairs() {
        for (guess, target) in [
            ("aabbe", "apple"),
            ("speed", "erase"),
            ("robot", "floor"),
            ("eerie", "there"),
            ("lolly", "hello"),
            ("aaaaa", "abaca"),
            ("mammoth", "monster"),
        ] {
            assert_letter_budget(guess, target);
        }
    }

    #[test]
    fn keyboard_keeps_best_state() {
        let target = Word::new("crane").unwrap();
        let guesses = vec![Word::new("react").unwrap(), Word::new("crate").unwrap()];
        let keyboard = KeyboardState::from_guesses(&guesses, &target);

        // 'r' was present in REACT, correct in CRATE
        assert_eq!(keyboard.state(b'r'), Some(Tile::Correct));
        assert_eq!(keyboard.state(b'e'), Some(Tile::Correct));
        assert_eq!(keyboard.state(b't'), Some(Tile::Absent));
        assert_eq!(keyboard.state(b'z'), None);
    }

    #[test]
    fn keyboard_accepts_uppercase_lookup() {
        let target = Word::new("crane").unwrap();
        let keyboard = KeyboardState::from_guesses(&[Word::new("crane").unwrap()], &target);
        assert_eq!(keyboard.state(b'C'), Some(Tile::Correct));
    }

    #[test]
    fn empty_history_is_unseen() {
        let target = Word::new("crane").unwrap();
        let keyboard = KeyboardState::from_guesses(&[], &target);
        assert!(KeyboardState::ROWS
            .iter()
            .flat_map(|row| row.bytes())
            .all(|letter| keyboard.state(letter).is_none()));
    }
}
