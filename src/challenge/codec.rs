//! Challenge token encoding
//!
//! A token is a small JSON record, base64url-encoded without padding:
//!
//! ```text
//! {"v": 1, "n": "ana", "s": "atoll", "c": "allotatoll"}
//! ```
//!
//! `v` is the format version, `n` an optional originator name, `s` the secret
//! and `c` every guessed letter in order. Scores are not part of the token;
//! the receiver recomputes them from `s` and `c`, so what it displays always
//! agrees with the embedded secret.
//!
//! The encoding only keeps the secret out of plain sight in a URL. Anyone can
//! decode it.

use crate::core::{GameSession, GuessRecord, MAX_GUESSES, WORD_LENGTH, Word, WordError, found_word};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::{Value, json};
use std::fmt;
use thiserror::Error;

/// Token format version produced by [`encode`] and accepted by [`decode`]
pub const CHALLENGE_VERSION: u32 = 1;

/// Reasons a token cannot be decoded
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("challenge token is empty")]
    Empty,
    #[error("challenge token is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("challenge token payload is malformed: {0}")]
    Payload(#[from] serde_json::Error),
    #[error(
        "unsupported challenge version {0} (expected {expected})",
        expected = CHALLENGE_VERSION
    )]
    UnsupportedVersion(u32),
    #[error("challenge secret is not a valid word: {0}")]
    InvalidSecret(#[source] WordError),
    #[error("challenge letters must come in groups of 5, got {0} letters")]
    InvalidLetterCount(usize),
    #[error("challenge guess {index} is not a valid word: {source}")]
    InvalidGuess {
        index: usize,
        #[source]
        source: WordError,
    },
    #[error("challenge has {0} guesses, at most {max} allowed", max = MAX_GUESSES)]
    TooManyGuesses(usize),
    #[error("challenge guess {0} comes after the word was already found")]
    GuessAfterSolve(usize),
}

/// An encoded, URL-safe challenge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChallengeToken(String);

impl ChallengeToken {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ChallengeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChallengeToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A decoded challenge, with scores recomputed locally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeData {
    pub version: u32,
    pub originator: Option<String>,
    pub secret: Word,
    pub guesses: Vec<GuessRecord>,
}

impl ChallengeData {
    /// Whether the challenger's last guess solved the word
    #[must_use]
    pub fn found_word(&self) -> bool {
        found_word(&self.guesses)
    }

    /// Number of guesses the challenger made
    #[must_use]
    pub fn tries(&self) -> usize {
        self.guesses.len()
    }

    /// Name to show for the challenger
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.originator.as_deref().unwrap_or("Challenger")
    }
}

#[derive(Deserialize)]
struct Payload {
    v: u32,
    #[serde(default)]
    n: Option<String>,
    s: String,
    c: String,
}

/// Encode a game into a shareable token
///
/// Works for unfinished games too; the receiver just sees fewer guesses.
/// A blank `originator` is left out.
#[must_use]
pub fn encode(session: &GameSession, originator: Option<&str>) -> ChallengeToken {
    let mut payload = json!({
        "v": CHALLENGE_VERSION,
        "s": session.secret().text(),
        "c": session.all_letters(),
    });

    if let Some(name) = originator.map(str::trim).filter(|n| !n.is_empty()) {
        payload["n"] = Value::from(name);
    }

    ChallengeToken(URL_SAFE_NO_PAD.encode(payload.to_string()))
}

/// Decode a token and replay its guesses against the embedded secret
///
/// Accepts the URL-safe and the standard base64 alphabet, with or without
/// padding, and ignores surrounding whitespace.
///
/// # Errors
/// Returns a `DecodeError` for an empty or malformed token, a payload that is
/// not the expected JSON record, an unknown version, secret/letters that do
/// not form valid words, or guesses that continue after the word was found.
pub fn decode(token: &str) -> Result<ChallengeData, DecodeError> {
    let trimmed = token.trim().trim_end_matches('=');
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }

    let normalized: String = trimmed
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let bytes = URL_SAFE_NO_PAD.decode(normalized)?;
    let payload: Payload = serde_json::from_slice(&bytes)?;

    if payload.v != CHALLENGE_VERSION {
        tracing::debug!(version = payload.v, "rejecting challenge with unknown version");
        return Err(DecodeError::UnsupportedVersion(payload.v));
    }

    let secret = Word::new(&payload.s).map_err(DecodeError::InvalidSecret)?;
    let guesses = rescore(&secret, &payload.c)?;

    let originator = payload.n.filter(|n| !n.trim().is_empty());

    Ok(ChallengeData {
        version: payload.v,
        originator,
        secret,
        guesses,
    })
}

fn rescore(secret: &Word, letters: &str) -> Result<Vec<GuessRecord>, DecodeError> {
    let letters = letters.as_bytes();
    if letters.len() % WORD_LENGTH != 0 {
        return Err(DecodeError::InvalidLetterCount(letters.len()));
    }

    let count = letters.len() / WORD_LENGTH;
    if count > MAX_GUESSES {
        return Err(DecodeError::TooManyGuesses(count));
    }

    let records = letters
        .chunks_exact(WORD_LENGTH)
        .enumerate()
        .map(|(index, chunk)| {
            Word::from_bytes(chunk)
                .map(|word| GuessRecord::scored(word, secret))
                .map_err(|source| DecodeError::InvalidGuess { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    // A game ends on its solving guess
    match records.iter().position(GuessRecord::is_solved) {
        Some(solved) if solved + 1 < records.len() => {
            Err(DecodeError::GuessAfterSolve(solved + 1))
        }
        _ => Ok(records),
    }
}
