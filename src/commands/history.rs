//! Stored history commands

use crate::config::AppConfig;
use crate::storage::GameStore;
use anyhow::{Context, Result};

/// Secrets played most recently, newest first
///
/// # Errors
///
/// Returns an error if the store exists but cannot be read.
pub fn recent_words(config: &AppConfig, limit: usize) -> Result<Vec<String>> {
    let store = GameStore::load(&config.store_path).context("failed to load game history")?;
    Ok(store.recent_secrets(limit).to_vec())
}

/// Delete every stored game and played word
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn reset_history(config: &AppConfig) -> Result<()> {
    let mut store = GameStore::load(&config.store_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "discarding unreadable game history");
        GameStore::default()
    });
    store.clear();
    store
        .save(&config.store_path)
        .context("failed to reset game history")?;

    tracing::info!(path = %config.store_path.display(), "game history cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameSession, Word};
    use std::fs;

    fn config_in(dir: &tempfile::TempDir) -> AppConfig {
        AppConfig {
            store_path: dir.path().join("store.json"),
            ..AppConfig::default()
        }
    }

    #[test]
    fn recent_words_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        assert!(recent_words(&config, 10).unwrap().is_empty());

        let mut store = GameStore::default();
        for secret in ["crane", "atoll"] {
            let game = GameSession::replay(Word::new(secret).unwrap(), [secret]).unwrap();
            store.record_game(&game, 0).unwrap();
        }
        store.save(&config.store_path).unwrap();

        assert_eq!(recent_words(&config, 10).unwrap(), ["atoll", "crane"]);
        assert_eq!(recent_words(&config, 1).unwrap(), ["atoll"]);
    }

    #[test]
    fn reset_clears_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);

        let mut store = GameStore::default();
        store.mark_used("crane");
        store.save(&config.store_path).unwrap();

        reset_history(&config).unwrap();
        assert_eq!(GameStore::load(&config.store_path).unwrap(), GameStore::default());
    }

    #[test]
    fn reset_recovers_corrupt_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(&dir);
        fs::write(&config.store_path, "not json").unwrap();

        reset_history(&config).unwrap();
        assert_eq!(GameStore::load(&config.store_path).unwrap(), GameStore::default());
    }
}
