//! Runtime configuration
//!
//! Resolved once from command-line flags (with environment fallbacks) and
//! handed to the commands.

use crate::wordlists::{Dictionary, loader::load_from_file};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Default location of the game store
pub const DEFAULT_STORE_PATH: &str = "yordle_store.json";

/// Default base for share links
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// JSON file holding played secrets and finished games
    pub store_path: PathBuf,
    /// Page that share links point at
    pub base_url: String,
    /// Optional file of extra acceptable guesses, one per line
    pub extra_words: Option<PathBuf>,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            base_url: DEFAULT_BASE_URL.to_string(),
            extra_words: None,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// Build the guess dictionary: embedded lists plus any extra words
    ///
    /// # Errors
    /// Fails if the extra word file cannot be read.
    pub fn dictionary(&self) -> Result<Dictionary> {
        let mut dictionary = Dictionary::embedded();

        if let Some(path) = &self.extra_words {
            let words = load_from_file(path)
                .with_context(|| format!("failed to read word list {}", path.display()))?;
            tracing::info!(count = words.len(), "added extra acceptable words");
            dictionary.extend_acceptable(words);
        }

        Ok(dictionary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use std::io::Write;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store_path, PathBuf::from("yordle_store.json"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!config.verbose);
    }

    #[test]
    fn dictionary_without_extra_words() {
        let dict = AppConfig::default().dictionary().unwrap();
        assert!(!dict.is_valid(&Word::new("qajaq").unwrap()));
    }

    #[test]
    fn dictionary_with_extra_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "qajaq").unwrap();

        let config = AppConfig {
            extra_words: Some(file.path().to_path_buf()),
            ..AppConfig::default()
        };
        let dict = config.dictionary().unwrap();
        assert!(dict.is_valid(&Word::new("qajaq").unwrap()));
    }

    #[test]
    fn dictionary_with_missing_word_file() {
        let config = AppConfig {
            extra_words: Some(PathBuf::from("/nonexistent/words.txt")),
            ..AppConfig::default()
        };
        assert!(config.dictionary().is_err());
    }
}
