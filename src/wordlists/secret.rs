//! Secret word selection
//!
//! Two ways to pick a secret: a fresh random word the player has not seen
//! yet, or the daily word shared by everyone playing on the same day.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use std::time::{SystemTime, UNIX_EPOCH};

const SECONDS_PER_DAY: u64 = 86_400;

/// A randomly chosen secret
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretChoice {
    pub word: Word,
    /// Every word in the pool had been used; the caller should forget the
    /// used list before recording this one
    pub reset_used: bool,
}

/// Pick a random secret that does not appear in `used`
///
/// When every word in `pool` has been used, any word may be chosen and
/// `reset_used` is set. Returns `None` only for an empty pool.
pub fn choose_secret<R, S>(rng: &mut R, pool: &[Word], used: &[S]) -> Option<SecretChoice>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    let used: FxHashSet<&str> = used.iter().map(AsRef::as_ref).collect();
    let remaining: Vec<&Word> = pool.iter().filter(|w| !used.contains(w.text())).collect();

    if let Some(&word) = remaining.choose(rng) {
        return Some(SecretChoice {
            word: word.clone(),
            reset_used: false,
        });
    }

    tracing::info!(pool = pool.len(), "every secret has been played, starting over");
    pool.choose(rng).map(|word| SecretChoice {
        word: word.clone(),
        reset_used: true,
    })
}

/// The secret for a given day (days since the Unix epoch)
///
/// Deterministic: everybody asking for the same day gets the same word.
#[must_use]
pub fn daily_secret(pool: &[Word], day: u64) -> Option<&Word> {
    let mut rng = StdRng::seed_from_u64(day);
    pool.choose(&mut rng)
}

/// Day number of a point in time
#[must_use]
pub fn day_number(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() / SECONDS_PER_DAY)
}

/// Day number of the current date
#[must_use]
pub fn today() -> u64 {
    day_number(SystemTime::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::time::Duration;

    fn pool() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "atoll", "mossy"])
    }

    #[test]
    fn choose_skips_used_words() {
        let pool = pool();
        let used = ["crane", "slate", "atoll"];
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let choice = choose_secret(&mut rng, &pool, &used).unwrap();
            assert_eq!(choice.word.text(), "mossy");
            assert!(!choice.reset_used);
        }
    }

    #[test]
    fn choose_resets_when_pool_exhausted() {
        let pool = pool();
        let used = ["crane", "slate", "atoll", "mossy"];
        let mut rng = StdRng::seed_from_u64(7);

        let choice = choose_secret(&mut rng, &pool, &used).unwrap();
        assert!(choice.reset_used);
        assert!(pool.contains(&choice.word));
    }

    #[test]
    fn choose_from_empty_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(choose_secret::<_, &str>(&mut rng, &[], &[]).is_none());
    }

    #[test]
    fn daily_secret_is_stable_per_day() {
        let pool = words_from_slice(crate::wordlists::SECRET_WORDS);
        let first = daily_secret(&pool, 20_000).unwrap();
        assert_eq!(daily_secret(&pool, 20_000), Some(first));
        assert!(pool.contains(first));
    }

    #[test]
    fn daily_secret_empty_pool() {
        assert!(daily_secret(&[], 1).is_none());
    }

    #[test]
    fn day_number_counts_whole_days() {
        assert_eq!(day_number(UNIX_EPOCH), 0);
        assert_eq!(day_number(UNIX_EPOCH + Duration::from_secs(86_399)), 0);
        assert_eq!(day_number(UNIX_EPOCH + Duration::from_secs(86_400 * 3 + 5)), 3);
    }
}
