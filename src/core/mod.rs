//! Core domain types for the game
//!
//! Words, scores, guesses and game sessions. Everything here is pure: the
//! same inputs always give the same outputs, and nothing touches storage or
//! the terminal.

mod guess;
mod keyboard;
mod score;
mod session;
mod word;

pub use guess::{GuessRecord, found_word};
pub use keyboard::{KEYBOARD_LAYOUT, KeyState, Keyboard};
pub use score::{LetterScore, Score, ScoreError, score};
pub use session::{GameSession, GuessError, MAX_GUESSES};
pub use word::{WORD_LENGTH, Word, WordError};
