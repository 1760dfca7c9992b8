//! Virtual keyboard letter states
//!
//! Keys are colored from the whole guess history: a letter that was typed is
//! `Absent`, it becomes `Present` if the secret contains it anywhere, and
//! `Correct` once it has been an exact match in any guess.

use super::{GuessRecord, LetterScore, Word};

/// Key rows in display order
pub const KEYBOARD_LAYOUT: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Display state of a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum KeyState {
    #[default]
    Unused,
    Absent,
    Present,
    Correct,
}

/// State of every letter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    keys: [KeyState; 26],
}

impl Keyboard {
    /// Derive key states from a guess history
    #[must_use]
    pub fn from_history(secret: &Word, history: &[GuessRecord]) -> Self {
        let mut keys = [KeyState::Unused; 26];

        for record in history {
            let letters = record.letters().chars();
            for (&letter, &score) in letters.iter().zip(record.scores().letters()) {
                let state = if score == LetterScore::Exact {
                    KeyState::Correct
                } else if secret.has_letter(letter) {
                    KeyState::Present
                } else {
                    KeyState::Absent
                };
                let key = &mut keys[usize::from(letter - b'a')];
                *key = (*key).max(state);
            }
        }

        Self { keys }
    }

    /// State of a letter key; non-letters are always `Unused`
    #[must_use]
    pub fn state(&self, letter: char) -> KeyState {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            self.keys[usize::from(letter as u8 - b'a')]
        } else {
            KeyState::Unused
        }
    }

    /// Rows of (letter, state) pairs following [`KEYBOARD_LAYOUT`]
    pub fn rows(&self) -> impl Iterator<Item = Vec<(char, KeyState)>> + '_ {
        KEYBOARD_LAYOUT
            .iter()
            .map(move |row| row.chars().map(|c| (c, self.state(c))).collect())
    }
}
