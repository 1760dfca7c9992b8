//! Challenge commands
//!
//! Build, inspect and compare challenge tokens outside of a game.

use crate::challenge::{
    ChallengeData, ChallengeToken, DecodeError, Outcome, compare_outcomes, decode, encode,
    token_from_url,
};
use crate::core::{GameSession, Word};
use anyhow::{Context, Result, bail};

/// Decode a token given either bare or inside a share link
///
/// # Errors
/// Returns the `DecodeError` of the underlying token.
pub fn decode_argument(arg: &str) -> Result<ChallengeData, DecodeError> {
    decode(token_from_url(arg).unwrap_or(arg))
}

/// Encode a game given as a secret and the guesses made against it
///
/// # Errors
///
/// Returns an error if the secret or a guess is not a valid word, or if
/// guesses continue after the game ended.
pub fn encode_game<S: AsRef<str>>(
    secret: &str,
    guesses: &[S],
    name: Option<&str>,
) -> Result<ChallengeToken> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret '{secret}'"))?;
    let session = GameSession::replay(secret, guesses).context("invalid guesses")?;
    Ok(encode(&session, name))
}

/// Two decoded challenges and how the first fared against the second
pub struct ComparisonResult {
    pub outcome: Outcome,
    pub mine: ChallengeData,
    pub theirs: ChallengeData,
}

/// Compare two challenges for the same secret
///
/// # Errors
///
/// Returns an error if either token cannot be decoded or the two games were
/// played on different secrets.
pub fn compare_challenges(mine: &str, theirs: &str) -> Result<ComparisonResult> {
    let mine = decode_argument(mine).context("failed to decode my challenge")?;
    let theirs = decode_argument(theirs).context("failed to decode their challenge")?;

    if mine.secret != theirs.secret {
        bail!("the two challenges are for different words");
    }

    let outcome = compare_outcomes(&mine.guesses, &theirs.guesses);
    Ok(ComparisonResult {
        outcome,
        mine,
        theirs,
    })
}
