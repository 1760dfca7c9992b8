//! Interactive game
//!
//! Line-based play on any reader/writer pair: one guess per line, the board
//! redrawn after every guess, and the share message printed at the end.

use super::challenge::decode_argument;
use crate::challenge::{ChallengeData, compare_outcomes, encode, share_text, share_url};
use crate::config::AppConfig;
use crate::core::{GameSession, MAX_GUESSES, Word};
use crate::output::{print_board, print_challenge_intro, print_game_over, print_outcome};
use crate::storage::{GameStore, now_ms};
use crate::wordlists::Dictionary;
use crate::wordlists::secret::{choose_secret, daily_secret, today};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Options for a single game
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    /// Play the shared word of the day instead of a random one
    pub daily: bool,
    /// Challenge token or share link to play against
    pub challenge: Option<String>,
    /// Name embedded in the challenge produced at the end
    pub name: Option<String>,
}

/// Play one game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or on terminal
/// I/O failure.
pub fn run_play(config: &AppConfig, options: &PlayOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_play_with(
        config,
        options,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rand::rng(),
    )
}

/// Play one game with explicit input, output and randomness
///
/// # Errors
///
/// Same as [`run_play`].
pub fn run_play_with<R, W, G>(
    config: &AppConfig,
    options: &PlayOptions,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let dictionary = config.dictionary()?;
    let mut store = GameStore::load(&config.store_path)?;

    let challenge = options
        .challenge
        .as_deref()
        .and_then(|arg| match decode_argument(arg) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable challenge");
                None
            }
        });
    if options.challenge.is_some() && challenge.is_none() {
        writeln!(
            out,
            "{}",
            "That challenge link could not be read, starting a normal game.".yellow()
        )?;
    }

    let secret = pick_secret(options, challenge.as_ref(), &dictionary, &mut store, rng)?;
    tracing::debug!(daily = options.daily, challenge = challenge.is_some(), "starting game");

    if let Some(challenge) = &challenge {
        print_challenge_intro(out, challenge)?;
    }

    let Some(session) = play_game(input, out, &dictionary, GameSession::new(secret))? else {
        writeln!(out, "\nThanks for playing!")?;
        return Ok(());
    };

    print_game_over(out, &session)?;

    store
        .record_game(&session, now_ms())
        .context("failed to record game")?;
    store
        .save(&config.store_path)
        .context("failed to save game history")?;

    let token = encode(&session, options.name.as_deref());
    let url = share_url(&config.base_url, &token);
    writeln!(out, "\n{}", share_text(&session, &url))?;

    if let Some(challenge) = &challenge {
        let outcome = compare_outcomes(session.history(), &challenge.guesses);
        print_outcome(out, outcome, session.history(), challenge)?;
    }

    Ok(())
}

/// Choose the secret for a new game
///
/// A challenge fixes the secret; otherwise the daily word or a random word
/// not played before. Exhausting the pool clears the used list.
fn pick_secret<G: Rng + ?Sized>(
    options: &PlayOptions,
    challenge: Option<&ChallengeData>,
    dictionary: &Dictionary,
    store: &mut GameStore,
    rng: &mut G,
) -> Result<Word> {
    if let Some(challenge) = challenge {
        return Ok(challenge.secret.clone());
    }

    if options.daily {
        return daily_secret(dictionary.secrets(), today())
            .cloned()
            .context("no secret words available");
    }

    let choice = choose_secret(rng, dictionary.secrets(), &store.used_secrets)
        .context("no secret words available")?;
    if choice.reset_used {
        store.reset_used();
    }
    Ok(choice.word)
}

/// Run the guess loop until the game ends
///
/// Returns `None` if the player quits or input ends first.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    dictionary: &Dictionary,
    mut session: GameSession,
) -> Result<Option<GameSession>> {
    loop {
        print_board(out, &session)?;
        if session.is_finished() {
            return Ok(Some(session));
        }

        write!(out, "Guess {}/{}: ", session.tries() + 1, MAX_GUESSES)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => return Ok(None),
            guess => match session.guess(guess, dictionary) {
                Ok(next) => session = next,
                Err(e) => writeln!(out, "{}", e.to_string().red())?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["atoll", "crane", "allot", "mossy"]),
            words_from_slice(&["sassy"]),
        )
    }

    fn play(script: &str, secret: &str) -> (Option<GameSession>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let session = GameSession::new(Word::new(secret).unwrap());
        let result = play_game(&mut Cursor::new(script), &mut out, &dictionary(), session).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            store_path: dir.path().join("store.json"),
            base_url: "https://example.com/".to_string(),
            ..AppConfig::default()
        }
    }

    fn run(config: &AppConfig, options: &PlayOptions, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        run_play_with(config, options, &mut Cursor::new(script), &mut out, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn game_ends_on_correct_guess() {
        let (session, text) = play("crane\nallot\natoll\n", "atoll");
        let session = session.unwrap();

        assert!(session.is_won());
        assert_eq!(session.tries(), 3);
        assert!(text.contains("Guess 3/6: "));
        assert!(!text.contains("Guess 4/6: "));
    }

    #[test]
    fn invalid_guesses_do_not_count() {
        let (session, text) = play("zzzzz\nab\n\natoll\n", "atoll");

        assert_eq!(session.unwrap().tries(), 1);
        assert!(text.contains("'zzzzz' is not in the word list"));
        assert!(text.contains("invalid guess"));
    }

    #[test]
    fn game_lost_after_six_guesses() {
        let (session, _) = play(&"crane\n".repeat(8), "atoll");
        let session = session.unwrap();
        assert!(session.is_finished());
        assert!(!session.is_won());
        assert_eq!(session.tries(), 6);
    }

    #[test]
    fn quit_and_end_of_input() {
        let (session, _) = play("crane\nquit\natoll\n", "atoll");
        assert!(session.is_none());

        let (session, _) = play("crane\n", "atoll");
        assert!(session.is_none());
    }

    #[test]
    fn full_game_records_history_and_prints_share_text() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let store = GameStore::load(&config.store_path).unwrap();
        assert!(store.games.is_empty());

        // Six misses with a word that is never a secret guarantees a loss
        let text = run(&config, &PlayOptions::default(), &"lolly\n".repeat(6));

        assert!(text.contains("Out of guesses"));
        assert!(text.contains("Can you succeed where I failed on Yordle?"));
        assert!(text.contains("https://example.com/?challenge="));

        let store = GameStore::load(&config.store_path).unwrap();
        assert_eq!(store.games.len(), 1);
        assert_eq!(store.used_secrets.len(), 1);
        assert!(!store.games[0].won);
    }

    #[test]
    fn challenge_game_uses_challenge_secret_and_compares() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let secret = Word::new("atoll").unwrap();
        let theirs = GameSession::replay(secret, ["crane", "allot", "atoll"]).unwrap();
        let link = share_url("https://example.com/", &encode(&theirs, Some("Ana")));
        let options = PlayOptions {
            challenge: Some(link),
            name: Some("Bo".to_string()),
            ..PlayOptions::default()
        };

        let text = run(&config, &options, "allot\natoll\n");

        assert!(text.contains("Ana found the word in 3 tries"));
        assert!(text.contains("Solved ATOLL in 2 guesses!"));
        assert!(text.contains("Can you beat my score on Yordle?"));
        assert!(text.contains("I Win!"));

        let store = GameStore::load(&config.store_path).unwrap();
        assert_eq!(store.used_secrets, ["atoll"]);
    }

    #[test]
    fn unreadable_challenge_falls_back_to_normal_game() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        let options = PlayOptions {
            challenge: Some("garbage!".to_string()),
            ..PlayOptions::default()
        };

        let text = run(&config, &options, "quit\n");
        assert!(text.contains("could not be read"));
        assert!(text.contains("Thanks for playing!"));
        assert!(!text.contains("I Win!"));
    }

    #[test]
    fn random_secret_avoids_used_words() {
        let dict = dictionary();
        let mut store = GameStore::default();
        for word in ["atoll", "crane", "allot"] {
            store.mark_used(word);
        }
        let mut rng = StdRng::seed_from_u64(3);

        let options = PlayOptions::default();
        let secret = pick_secret(&options, None, &dict, &mut store, &mut rng).unwrap();
        assert_eq!(secret.text(), "mossy");

        store.mark_used("mossy");
        let secret = pick_secret(&options, None, &dict, &mut store, &mut rng).unwrap();
        assert!(dict.secrets().contains(&secret));
        assert!(store.used_secrets.is_empty());
    }

    #[test]
    fn daily_secret_is_shared() {
        let dict = dictionary();
        let mut store = GameStore::default();
        let options = PlayOptions {
            daily: true,
            ..PlayOptions::default()
        };

        let mut rng = StdRng::seed_from_u64(1);
        let first = pick_secret(&options, None, &dict, &mut store, &mut rng).unwrap();
        let mut rng = StdRng::seed_from_u64(2);
        let second = pick_secret(&options, None, &dict, &mut store, &mut rng).unwrap();
        assert_eq!(first, second);
    }
}
