//! Five-letter word representation
//!
//! A `Word` is always exactly five lowercase ASCII letters. Everything that
//! compares guesses against secrets works on validated words, so the scorer
//! never has to re-check its input.

use std::fmt;
use thiserror::Error;

/// Number of letters in every word
pub const WORD_LENGTH: usize = 5;

/// A validated 5-letter word, normalized to lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive; the stored form is lowercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use yordle::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        Self::from_bytes(text.as_bytes())
    }

    /// Create a Word from raw ASCII bytes
    ///
    /// # Errors
    /// Same conditions as [`Word::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WordError> {
        let chars: [u8; WORD_LENGTH] = bytes
            .try_into()
            .map_err(|_| WordError::InvalidLength(bytes.len()))?;

        if !chars.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !chars.iter().all(u8::is_ascii_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = chars.map(|c| c.to_ascii_lowercase());
        let text = chars.iter().map(|&c| char::from(c)).collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Number of times a letter appears in the word
    #[inline]
    #[must_use]
    pub fn letter_count(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
