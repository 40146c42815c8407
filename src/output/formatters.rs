//! Formatting utilities for terminal output

use crate::core::{Feedback, KeyboardState, Tile, Word};
use colored::{ColoredString, Colorize};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .tiles()
        .iter()
        .map(|tile| match tile {
            Tile::Absent => '⬜',
            Tile::Present => '🟨',
            Tile::Correct => '🟩',
        })
        .collect()
}

fn paint(text: &str, tile: Option<Tile>) -> ColoredString {
    match tile {
        Some(Tile::Correct) => text.black().on_green().bold(),
        Some(Tile::Present) => text.black().on_yellow().bold(),
        Some(Tile::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// A guess as a row of colored letter tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.tiles())
        .map(|(&letter, &tile)| {
            let cell = format!(" {} ", char::from(letter.to_ascii_uppercase()));
            paint(&cell, Some(tile)).to_string()
        })
        .collect()
}

/// Keyboard rows with each letter colored by its best state this round
#[must_use]
pub fn colored_keyboard(keyboard: &KeyboardState) -> Vec<String> {
    KeyboardState::ROWS
        .iter()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .bytes()
                .map(|letter| {
                    let key = format!("{} ", char::from(letter.to_ascii_uppercase()));
                    paint(&key, keyboard.state(letter)).to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}

/// Two-decimal average, or a dash when there is nothing to average
#[must_use]
pub fn format_average(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.2}"))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(guess: &str, target: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn emoji_all_gray() {
        assert_eq!(feedback_to_emoji(&feedback("bight", "crane")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed() {
        assert_eq!(feedback_to_emoji(&feedback("aabbe", "apple")), "🟩⬜⬜⬜🟩");
    }

    #[test]
    fn emoji_boss_length() {
        assert_eq!(
            feedback_to_emoji(&feedback("journey", "journey")).chars().count(),
            7
        );
    }

    #[test]
    fn averages() {
        assert_eq!(format_average(None), "—");
        assert_eq!(format_average(Some(3.456)), "3.46");
    }

    #[test]
    fn keyboard_has_three_rows() {
        colored::control::set_override(false);
        let keyboard = KeyboardState::default();
        let rows = colored_keyboard(&keyboard);
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("Q W E"));
        assert!(rows[2].starts_with("  Z X C"));
    }

    #[test]
    fn progress_bar_bounds() {
        assert_eq!(create_progress_bar(0, 10, 10), "░░░░░░░░░░");
        assert_eq!(create_progress_bar(10, 10, 10), "██████████");
        assert_eq!(create_progress_bar(5, 10, 10), "█████░░░░░");
        assert_eq!(create_progress_bar(3, 0, 4), "░░░░");
    }
}
