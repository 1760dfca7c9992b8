//! Game session state
//!
//! A `GameSession` is a value: submitting a guess returns the next session
//! and leaves the old one untouched. The front end owns whichever copy is
//! current.

use super::{GuessRecord, Keyboard, Word, WordError, guess::found_word};
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Maximum number of guesses in one game
pub const MAX_GUESSES: usize = 6;

/// Reasons a guess is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the game is already over")]
    GameOver,
    #[error("invalid guess: {0}")]
    InvalidWord(#[from] WordError),
    #[error("'{0}' is not in the word list")]
    NotInWordList(String),
}

/// One game: the secret and every guess made so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: Word,
    history: Vec<GuessRecord>,
    finished: bool,
    won: bool,
}

impl GameSession {
    /// Start a new game
    #[must_use]
    pub const fn new(secret: Word) -> Self {
        Self {
            secret,
            history: Vec::new(),
            finished: false,
            won: false,
        }
    }

    /// Rebuild a session from raw guesses, rescoring each one
    ///
    /// Used when restoring saved games. Guesses are not checked against a
    /// dictionary.
    ///
    /// # Errors
    /// Fails if a guess is not a word or the game ends before the last guess.
    pub fn replay<I>(secret: Word, guesses: I) -> Result<Self, GuessError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        guesses
            .into_iter()
            .try_fold(Self::new(secret), |session, guess| {
                session.with_guess(Word::new(guess)?)
            })
    }

    /// Submit a guess typed by the player
    ///
    /// # Errors
    /// - `GuessError::GameOver` if the session is finished
    /// - `GuessError::InvalidWord` if the input is not a 5-letter word
    /// - `GuessError::NotInWordList` if the dictionary does not know it
    pub fn guess(&self, input: &str, dictionary: &Dictionary) -> Result<Self, GuessError> {
        if self.finished {
            return Err(GuessError::GameOver);
        }

        let word = Word::new(input.trim())?;
        if !dictionary.is_valid(&word) {
            tracing::debug!(guess = %word, "rejected guess not in word list");
            return Err(GuessError::NotInWordList(word.text().to_string()));
        }

        self.with_guess(word)
    }

    /// Score an already-validated word and return the next session
    ///
    /// # Errors
    /// Returns `GuessError::GameOver` if the session is finished.
    pub fn with_guess(&self, word: Word) -> Result<Self, GuessError> {
        if self.finished {
            return Err(GuessError::GameOver);
        }

        let record = GuessRecord::scored(word, &self.secret);
        let mut next = self.clone();
        next.history.push(record);
        next.won = found_word(&next.history);
        next.finished = next.won || next.history.len() >= MAX_GUESSES;

        if next.finished {
            tracing::info!(won = next.won, tries = next.history.len(), "game finished");
        }

        Ok(next)
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// Guesses in submission order
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Number of guesses made
    #[must_use]
    pub fn tries(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// Every guessed letter, concatenated in order
    #[must_use]
    pub fn all_letters(&self) -> String {
        self.history.iter().map(|r| r.letters().text()).collect()
    }

    /// Key states for the on-screen keyboard
    #[must_use]
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::from_history(&self.secret, &self.history)
    }
}
