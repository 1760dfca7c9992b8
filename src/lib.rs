//! Yordle
//!
//! A daily word-guessing game with scored guesses and serverless
//! "challenge a friend" links.
//!
//! # Quick Start
//!
//! ```rust
//! use yordle::challenge::{Outcome, compare_outcomes, decode, encode};
//! use yordle::core::{GameSession, Word, score};
//!
//! // Score a guess
//! assert_eq!(score("allot", "atoll").unwrap().to_digits(), "21111");
//!
//! // Share a finished game and replay it on the other side
//! let secret = Word::new("atoll").unwrap();
//! let mine = GameSession::replay(secret, ["allot", "atoll"]).unwrap();
//! let token = encode(&mine, Some("Ana"));
//! let theirs = decode(token.as_str()).unwrap();
//!
//! assert_eq!(compare_outcomes(mine.history(), &theirs.guesses), Outcome::Draw);
//! ```

// Core domain types
pub mod core;

// Challenge tokens, outcomes and share links
pub mod challenge;

// Word lists and secret selection
pub mod wordlists;

// Persisted game history
pub mod storage;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
