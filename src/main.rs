//! Yordle - CLI
//!
//! Play the daily word game in the terminal and trade challenge links.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use yordle::{
    challenge::share_url,
    commands::{
        PlayOptions, compare_challenges, decode_argument, encode_game, recent_words,
        reset_history, run_play,
    },
    config::{AppConfig, DEFAULT_BASE_URL, DEFAULT_STORE_PATH},
    core::score,
    output::{print_challenge, print_outcome, print_recent_secrets},
    storage::RECENT_SECRETS,
};

#[derive(Parser)]
#[command(
    name = "yordle",
    about = "Daily word-guessing game with challenge-a-friend links",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game history file
    #[arg(long, global = true, env = "YORDLE_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Page that share links point at
    #[arg(long, global = true, env = "YORDLE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Extra acceptable guesses, one word per line
    #[arg(long, global = true, env = "YORDLE_EXTRA_WORDS")]
    extra_words: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game (default)
    Play {
        /// Play the word of the day
        #[arg(short, long)]
        daily: bool,

        /// Challenge token or share link to play against
        #[arg(short, long)]
        challenge: Option<String>,

        /// Your name, shown to whoever receives your challenge
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Score a guess against a secret
    Score {
        guess: String,
        secret: String,
    },

    /// Build a challenge token from a secret and its guesses
    Encode {
        /// The secret word
        #[arg(short, long)]
        secret: String,

        /// Guesses in the order they were made
        guesses: Vec<String>,

        /// Name shown to the receiver
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Show the game inside a challenge token or link
    Decode {
        token: String,
    },

    /// Compare my challenge with someone else's
    Compare {
        mine: String,
        theirs: String,
    },

    /// List recently played words
    History {
        /// Number of words to show
        #[arg(short = 'n', long, default_value_t = RECENT_SECRETS)]
        limit: usize,
    },

    /// Delete all stored games and played words
    Reset,
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            store_path: self.store.clone(),
            base_url: self.base_url.clone(),
            extra_words: self.extra_words.clone(),
            verbose: self.verbose,
        }
    }
}

/// Install the log subscriber; `RUST_LOG` overrides the verbosity flag
fn init_logging(verbose: bool) {
    let default_level = if verbose { "yordle=debug" } else { "yordle=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(config.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        daily: false,
        challenge: None,
        name: None,
    });

    match command {
        Commands::Play {
            daily,
            challenge,
            name,
        } => run_play(
            &config,
            &PlayOptions {
                daily,
                challenge,
                name,
            },
        ),
        Commands::Score { guess, secret } => run_score_command(&guess, &secret),
        Commands::Encode {
            secret,
            guesses,
            name,
        } => run_encode_command(&config, &secret, &guesses, name.as_deref()),
        Commands::Decode { token } => run_decode_command(&token),
        Commands::Compare { mine, theirs } => run_compare_command(&mine, &theirs),
        Commands::History { limit } => run_history_command(&config, limit),
        Commands::Reset => {
            reset_history(&config)?;
            println!("Game history cleared.");
            Ok(())
        }
    }
}

fn run_score_command(guess: &str, secret: &str) -> Result<()> {
    let result = score(guess, secret)?;
    println!("{} {}", result.to_emoji(), result.to_digits());
    Ok(())
}

fn run_encode_command(
    config: &AppConfig,
    secret: &str,
    guesses: &[String],
    name: Option<&str>,
) -> Result<()> {
    let token = encode_game(secret, guesses, name)?;
    println!("{token}");
    println!("{}", share_url(&config.base_url, &token));
    Ok(())
}

fn run_decode_command(token: &str) -> Result<()> {
    let data = decode_argument(token)?;
    print_challenge(&mut io::stdout().lock(), &data)?;
    Ok(())
}

fn run_compare_command(mine: &str, theirs: &str) -> Result<()> {
    let result = compare_challenges(mine, theirs)?;
    print_outcome(
        &mut io::stdout().lock(),
        result.outcome,
        &result.mine.guesses,
        &result.theirs,
    )?;
    Ok(())
}

fn run_history_command(config: &AppConfig, limit: usize) -> Result<()> {
    let recent = recent_words(config, limit)?;
    print_recent_secrets(&mut io::stdout().lock(), &recent)?;
    Ok(())
}
