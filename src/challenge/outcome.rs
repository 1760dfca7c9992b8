//! Comparing two finished games

use crate::core::{GuessRecord, found_word};
use std::cmp::Ordering;

/// Result of my game against a challenger's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    /// The same comparison seen from the other player
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Win => Self::Loss,
            Self::Loss => Self::Win,
            Self::Draw => Self::Draw,
        }
    }

    /// Headline shown on the results screen
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Win => "I Win!",
            Self::Loss => "I Lose!",
            Self::Draw => "We Tied",
        }
    }
}

/// Compare my guesses with a challenger's
///
/// Finding the word beats not finding it; when both found it, fewer tries
/// wins and equal tries is a draw. Neither finding it is a draw.
#[must_use]
pub fn compare_outcomes(mine: &[GuessRecord], theirs: &[GuessRecord]) -> Outcome {
    match (found_word(mine), found_word(theirs)) {
        (true, true) => match mine.len().cmp(&theirs.len()) {
            Ordering::Less => Outcome::Win,
            Ordering::Greater => Outcome::Loss,
            Ordering::Equal => Outcome::Draw,
        },
        (true, false) => Outcome::Win,
        (false, true) => Outcome::Loss,
        (false, false) => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, Word};

    fn history(secret: &str, guesses: &[&str]) -> Vec<GuessRecord> {
        GameSession::replay(Word::new(secret).unwrap(), guesses)
            .unwrap()
            .history()
            .to_vec()
    }

    fn solved_in(tries: usize) -> Vec<GuessRecord> {
        let mut guesses = vec!["crane"; tries - 1];
        guesses.push("atoll");
        history("atoll", &guesses)
    }

    fn failed() -> Vec<GuessRecord> {
        history("atoll", &["crane"; 6])
    }

    #[test]
    fn fewer_tries_wins() {
        assert_eq!(compare_outcomes(&solved_in(2), &solved_in(4)), Outcome::Win);
        assert_eq!(compare_outcomes(&solved_in(5), &solved_in(3)), Outcome::Loss);
    }

    #[test]
    fn equal_tries_is_draw() {
        assert_eq!(compare_outcomes(&solved_in(3), &solved_in(3)), Outcome::Draw);
    }

    #[test]
    fn only_one_found_the_word() {
        assert_eq!(compare_outcomes(&solved_in(6), &failed()), Outcome::Win);
        assert_eq!(compare_outcomes(&failed(), &solved_in(1)), Outcome::Loss);
    }

    #[test]
    fn neither_found_the_word() {
        assert_eq!(compare_outcomes(&failed(), &failed()), Outcome::Draw);
        assert_eq!(compare_outcomes(&[], &failed()), Outcome::Draw);
    }

    #[test]
    fn only_last_guess_counts() {
        // An unfinished history whose last guess missed has not found the word
        let partial = history("atoll", &["crane", "allot"]);
        assert_eq!(compare_outcomes(&partial, &solved_in(6)), Outcome::Loss);
    }

    #[test]
    fn swapping_players_reverses_outcome() {
        let games = [
            solved_in(1),
            solved_in(3),
            solved_in(3),
            solved_in(6),
            failed(),
            Vec::new(),
        ];
        for mine in &games {
            for theirs in &games {
                let forward = compare_outcomes(mine, theirs);
                let backward = compare_outcomes(theirs, mine);
                assert_eq!(forward, backward.reversed());
                if forward == Outcome::Draw {
                    assert_eq!(backward, Outcome::Draw);
                }
            }
        }
    }

    #[test]
    fn reversed_and_headlines() {
        assert_eq!(Outcome::Win.reversed(), Outcome::Loss);
        assert_eq!(Outcome::Draw.reversed(), Outcome::Draw);
        assert_eq!(Outcome::Win.headline(), "I Win!");
        assert_eq!(Outcome::Loss.headline(), "I Lose!");
        assert_eq!(Outcome::Draw.headline(), "We Tied");
    }
}
