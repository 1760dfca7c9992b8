//! Word lists
//!
//! Embedded secret and acceptable word lists, plus the guess dictionary and
//! secret selection built on top of them.

mod embedded;
pub mod loader;
pub mod secret;

pub use embedded::{ACCEPTABLE_WORDS, ACCEPTABLE_WORDS_COUNT, SECRET_WORDS, SECRET_WORDS_COUNT};

use crate::core::Word;
use loader::words_from_slice;
use rustc_hash::FxHashSet;

/// The set of words a player may guess, and the pool secrets are drawn from
#[derive(Debug, Clone)]
pub struct Dictionary {
    secrets: Vec<Word>,
    accepted: FxHashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from a secret pool and extra acceptable guesses
    #[must_use]
    pub fn new(secrets: Vec<Word>, acceptable: impl IntoIterator<Item = Word>) -> Self {
        let mut accepted: FxHashSet<Word> = secrets.iter().cloned().collect();
        accepted.extend(acceptable);
        Self { secrets, accepted }
    }

    /// Dictionary over the embedded word lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(
            words_from_slice(SECRET_WORDS),
            words_from_slice(ACCEPTABLE_WORDS),
        )
    }

    /// Add more acceptable guesses (never used as secrets)
    pub fn extend_acceptable(&mut self, words: impl IntoIterator<Item = Word>) {
        self.accepted.extend(words);
    }

    /// Words that can be chosen as the secret
    #[must_use]
    pub fn secrets(&self) -> &[Word] {
        &self.secrets
    }

    /// A guess is valid iff it is a secret word or an acceptable word
    #[must_use]
    pub fn is_valid(&self, word: &Word) -> bool {
        self.accepted.contains(word)
    }

    /// Total number of guessable words
    #[must_use]
    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::embedded()
    }
}
