//! Command implementations

pub mod challenge;
pub mod history;
pub mod play;

pub use challenge::{ComparisonResult, compare_challenges, decode_argument, encode_game};
pub use history::{recent_words, reset_history};
pub use play::{PlayOptions, play_game, run_play, run_play_with};
