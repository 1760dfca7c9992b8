//! Terminal output formatting
//!
//! Display utilities for the game board and command results.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_challenge, print_challenge_intro, print_game_over, print_outcome,
    print_recent_secrets,
};
