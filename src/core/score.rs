//! Guess scoring
//!
//! A score holds one classification per letter position:
//! - 0 = None (letter not in the secret, or every copy already credited)
//! - 1 = Partial (letter in the secret, wrong position)
//! - 2 = Exact (letter in the correct position)

use super::word::{WORD_LENGTH, Word, WordError};
use thiserror::Error;

/// Classification of a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LetterScore {
    #[default]
    None = 0,
    Partial = 1,
    Exact = 2,
}

impl LetterScore {
    /// Numeric code used in score strings (`0`, `1`, `2`)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Parse a numeric code
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Partial),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Square used in share graphics
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::None => '⬛',
            Self::Partial => '🟨',
            Self::Exact => '🟩',
        }
    }
}

/// Error returned by the string scoring entry point
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid {role} '{input}': {source}")]
    InvalidInput {
        role: &'static str,
        input: String,
        #[source]
        source: WordError,
    },
}

/// Per-letter result of comparing a guess with the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Score([LetterScore; WORD_LENGTH]);

impl Score {
    /// All exact (the guess is the secret)
    pub const PERFECT: Self = Self([LetterScore::Exact; WORD_LENGTH]);

    /// Letter classifications in position order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterScore; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is an exact match
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: every exact position match is `Exact` and consumes that
    ///    secret slot
    /// 2. Second pass: each remaining guess letter takes the leftmost
    ///    unconsumed matching secret slot and becomes `Partial`
    /// 3. Anything left is `None`
    ///
    /// A secret letter is credited at most once, so a guess never gets more
    /// colored copies of a letter than the secret contains.
    ///
    /// # Examples
    /// ```
    /// use yordle::core::{Score, Word};
    ///
    /// let guess = Word::new("sassy").unwrap();
    /// let secret = Word::new("mossy").unwrap();
    ///
    /// assert_eq!(Score::calculate(&guess, &secret).to_digits(), "00222");
    /// ```
    #[must_use]
    // Allow: index shared between guess, secret, result and mask
    #[allow(clippy::needless_range_loop)]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [LetterScore::None; WORD_LENGTH];
        let mut consumed = [false; WORD_LENGTH];
        let guess = guess.chars();
        let secret = secret.chars();

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                result[i] = LetterScore::Exact;
                consumed[i] = true;
            }
        }

        for i in 0..WORD_LENGTH {
            if result[i] != LetterScore::None {
                continue;
            }
            let slot = (0..WORD_LENGTH).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = slot {
                result[i] = LetterScore::Partial;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Number of exact matches
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Exact).count()
    }

    /// Number of partial matches
    #[must_use]
    pub fn count_partial(self) -> usize {
        self.0.iter().filter(|&&s| s == LetterScore::Partial).count()
    }

    /// Compact digit form, e.g. `"01220"`
    #[must_use]
    pub fn to_digits(self) -> String {
        self.0.iter().map(|s| char::from(b'0' + s.code())).collect()
    }

    /// Parse the compact digit form
    #[must_use]
    pub fn from_digits(s: &str) -> Option<Self> {
        let bytes: [u8; WORD_LENGTH] = s.as_bytes().try_into().ok()?;
        let mut letters = [LetterScore::None; WORD_LENGTH];
        for (slot, byte) in letters.iter_mut().zip(bytes) {
            *slot = LetterScore::from_code(byte.checked_sub(b'0')?)?;
        }
        Some(Self(letters))
    }

    /// Parse a score from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for partial
    /// - '-'/'_'/⬛/⬜ for none
    ///
    /// # Examples
    /// ```
    /// use yordle::core::Score;
    ///
    /// let p1 = Score::parse("GY-GY").unwrap();
    /// let p2 = Score::parse("🟩🟨⬛🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut letters = [LetterScore::None; WORD_LENGTH];
        for (slot, ch) in letters.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterScore::Exact,
                'Y' | 'y' | '🟨' => LetterScore::Partial,
                '-' | '_' | '⬛' | '⬜' => LetterScore::None,
                _ => return None,
            };
        }

        Some(Self(letters))
    }

    /// Emoji row, e.g. "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_digits(s)
            .or_else(|| Self::parse(s))
            .ok_or_else(|| format!("Invalid score string: {s}"))
    }
}

/// Score a guess against a secret, both given as plain strings
///
/// Comparison is case-insensitive.
///
/// # Errors
/// Returns `ScoreError::InvalidInput` if either string is not a 5-letter word.
pub fn score(guess: &str, secret: &str) -> Result<Score, ScoreError> {
    let word = |role: &'static str, input: &str| {
        Word::new(input).map_err(|source| ScoreError::InvalidInput {
            role,
            input: input.to_string(),
            source,
        })
    };

    let guess = word("guess", guess)?;
    let secret = word("secret", secret)?;

    Ok(Score::calculate(&guess, &secret))
}
