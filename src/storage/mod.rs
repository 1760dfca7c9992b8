//! Local game history
//!
//! The game core never touches storage. The front end keeps one JSON file
//! with the secrets already played (so fresh games avoid repeats) and the raw
//! guesses of every finished game. Scores are not stored; a saved game is
//! rescored when it is restored.

use crate::core::{GameSession, GuessError, Word};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Number of recent secrets shown by default
pub const RECENT_SECRETS: usize = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("game store is corrupt: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("only finished games can be recorded")]
    UnfinishedGame,
    #[error("saved game cannot be replayed: {0}")]
    InvalidRecord(#[from] GuessError),
}

/// A finished game as saved on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub secret: String,
    pub guesses: Vec<String>,
    pub won: bool,
    pub timestamp_ms: u64,
}

impl GameRecord {
    /// Rebuild the session, rescoring every guess
    ///
    /// # Errors
    /// Returns `StoreError::InvalidRecord` if the saved words do not replay.
    pub fn to_session(&self) -> Result<GameSession, StoreError> {
        let secret = Word::new(&self.secret).map_err(GuessError::from)?;
        Ok(GameSession::replay(secret, &self.guesses)?)
    }
}

/// Everything persisted between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStore {
    /// Secrets already played, most recent first
    #[serde(default)]
    pub used_secrets: Vec<String>,
    /// Finished games in the order they were played
    #[serde(default)]
    pub games: Vec<GameRecord>,
}

impl GameStore {
    /// Load the store, or an empty one if the file does not exist yet
    ///
    /// # Errors
    /// Fails if the file exists but cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no game store yet, starting empty");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let store: Self = serde_json::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            games = store.games.len(),
            "loaded game store"
        );
        Ok(store)
    }

    /// Write the store, creating parent directories as needed
    ///
    /// # Errors
    /// Fails if the file or its directory cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        let io_error = |source: io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(io_error)?;

        tracing::debug!(path = %path.display(), games = self.games.len(), "saved game store");
        Ok(())
    }

    /// Record a finished game and mark its secret as used
    ///
    /// # Errors
    /// Returns `StoreError::UnfinishedGame` for a game still in progress.
    pub fn record_game(
        &mut self,
        session: &GameSession,
        timestamp_ms: u64,
    ) -> Result<(), StoreError> {
        if !session.is_finished() {
            return Err(StoreError::UnfinishedGame);
        }

        let secret = session.secret().text().to_string();
        self.mark_used(&secret);
        self.games.push(GameRecord {
            secret,
            guesses: session
                .history()
                .iter()
                .map(|r| r.letters().text().to_string())
                .collect(),
            won: session.is_won(),
            timestamp_ms,
        });
        Ok(())
    }

    /// Move a secret to the front of the used list
    pub fn mark_used(&mut self, secret: &str) {
        self.used_secrets.retain(|s| s != secret);
        self.used_secrets.insert(0, secret.to_string());
    }

    /// Forget which secrets were used (keeps game records)
    pub fn reset_used(&mut self) {
        self.used_secrets.clear();
    }

    /// Most recently played secrets, newest first
    #[must_use]
    pub fn recent_secrets(&self, limit: usize) -> &[String] {
        &self.used_secrets[..limit.min(self.used_secrets.len())]
    }

    /// Drop all persisted data
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Milliseconds since the Unix epoch
#[must_use]
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as u64)
}
