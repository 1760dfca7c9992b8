//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/secret_words.rs"));
include!(concat!(env!("OUT_DIR"), "/acceptable_words.rs"));
