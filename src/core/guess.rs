//! A single scored guess

use super::{Score, Word};

/// A submitted guess together with its score
///
/// Records are created once, when a guess is scored, and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    letters: Word,
    scores: Score,
}

impl GuessRecord {
    /// Score `guess` against `secret` and record the result
    #[must_use]
    pub fn scored(guess: Word, secret: &Word) -> Self {
        let scores = Score::calculate(&guess, secret);
        Self {
            letters: guess,
            scores,
        }
    }

    /// The guessed word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &Word {
        &self.letters
    }

    /// Per-letter classification
    #[inline]
    #[must_use]
    pub const fn scores(&self) -> Score {
        self.scores
    }

    /// True when every letter is an exact match
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.scores.is_perfect()
    }
}

/// Whether the last guess of a history solved the word
#[must_use]
pub fn found_word(history: &[GuessRecord]) -> bool {
    history.last().is_some_and(GuessRecord::is_solved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(guess: &str, secret: &str) -> GuessRecord {
        GuessRecord::scored(Word::new(guess).unwrap(), &Word::new(secret).unwrap())
    }

    #[test]
    fn record_scores_guess() {
        let r = record("robot", "floor");
        assert_eq!(r.letters().text(), "robot");
        assert_eq!(r.scores().to_digits(), "11020");
        assert!(!r.is_solved());
    }

    #[test]
    fn record_solved() {
        assert!(record("floor", "floor").is_solved());
    }

    #[test]
    fn found_word_checks_last_guess_only() {
        assert!(!found_word(&[]));
        assert!(found_word(&[record("crane", "floor"), record("floor", "floor")]));
        assert!(!found_word(&[record("floor", "floor"), record("crane", "floor")]));
    }
}
