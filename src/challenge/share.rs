//! Share links and messages

use super::ChallengeToken;
use crate::core::{GameSession, GuessRecord};

/// Query parameter carrying the token in share links
pub const CHALLENGE_PARAM: &str = "challenge";

/// Build a link that opens the game with a challenge
#[must_use]
pub fn share_url(base_url: &str, token: &ChallengeToken) -> String {
    let separator = if base_url.contains('?') { '&' } else { '?' };
    format!("{base_url}{separator}{CHALLENGE_PARAM}={token}")
}

/// Pull the challenge token out of a share link
///
/// Returns `None` when the input has no `challenge` query parameter.
#[must_use]
pub fn token_from_url(url: &str) -> Option<&str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key == CHALLENGE_PARAM && !value.is_empty()).then_some(value)
    })
}

/// Emoji grid, one row per guess
#[must_use]
pub fn score_grid(history: &[GuessRecord]) -> String {
    history
        .iter()
        .map(|record| record.scores().to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Message sent along with a challenge link
#[must_use]
pub fn share_text(session: &GameSession, url: &str) -> String {
    let title = if session.is_won() {
        "Can you beat my score on Yordle?"
    } else {
        "Can you succeed where I failed on Yordle?"
    };

    format!("{title}\n\n{}\n\n{url}", score_grid(session.history()))
}
