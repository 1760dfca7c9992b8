//! Challenge a friend
//!
//! A finished game is packed into a token that travels in a link. The friend
//! plays the same secret, then both games are compared without any server.

mod codec;
mod outcome;
pub mod share;

pub use codec::{CHALLENGE_VERSION, ChallengeData, ChallengeToken, DecodeError, decode, encode};
pub use outcome::{Outcome, compare_outcomes};
pub use share::{share_text, share_url, token_from_url};
