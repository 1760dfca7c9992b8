//! Formatting utilities for terminal output

use crate::core::{GuessRecord, KeyState, Keyboard, LetterScore, Score, WORD_LENGTH};
use colored::{ColoredString, Colorize};

/// One tile: the letter on a background matching its score
fn tile(letter: char, score: LetterScore) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match score {
        LetterScore::Exact => text.black().on_green(),
        LetterScore::Partial => text.black().on_yellow(),
        LetterScore::None => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .letters()
        .text()
        .chars()
        .zip(record.scores().letters())
        .map(|(letter, &score)| tile(letter, score).to_string())
        .collect()
}

/// Placeholder row for a guess not made yet
#[must_use]
pub fn empty_row() -> String {
    " _ ".repeat(WORD_LENGTH).bright_black().to_string()
}

/// A score without letters, as shown for a challenger's hidden guesses
#[must_use]
pub fn score_row(score: Score) -> String {
    score
        .letters()
        .iter()
        .map(|&s| tile(' ', s).to_string())
        .collect()
}

/// Keyboard rows, each key colored by its state
#[must_use]
pub fn keyboard_lines(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows()
        .enumerate()
        .map(|(indent, row)| {
            let keys: String = row
                .into_iter()
                .map(|(letter, state)| {
                    let key = format!("{} ", letter.to_ascii_uppercase());
                    let key = match state {
                        KeyState::Unused => key.normal(),
                        KeyState::Absent => key.bright_black(),
                        KeyState::Present => key.yellow().bold(),
                        KeyState::Correct => key.green().bold(),
                    };
                    key.to_string()
                })
                .collect();
            format!("{}{keys}", " ".repeat(indent))
        })
        .collect()
}
