use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::TextError;
use crate::generator::GeneratorMode;
use crate::generator::random_words::check_range;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mode: GeneratorMode,
    #[serde(default = "default_alphabet")]
    pub alphabet: String,
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_min_word_len")]
    pub min_word_len: usize,
    #[serde(default = "default_max_word_len")]
    pub max_word_len: usize,
    #[serde(default = "default_book_chunk_words")]
    pub book_chunk_words: usize,
    #[serde(default = "default_books_dir")]
    pub books_dir: String,
    #[serde(default)]
    pub dictionary_path: Option<String>,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_end_screen")]
    pub end_screen: bool,
}

fn default_alphabet() -> String {
    "asdf".to_string()
}
fn default_word_count() -> usize {
    50
}
fn default_min_word_len() -> usize {
    2
}
fn default_max_word_len() -> usize {
    4
}
fn default_book_chunk_words() -> usize {
    200
}
fn default_books_dir() -> String {
    "books".to_string()
}
fn default_theme() -> String {
    "midnight".to_string()
}
fn default_end_screen() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: GeneratorMode::default(),
            alphabet: default_alphabet(),
            word_count: default_word_count(),
            min_word_len: default_min_word_len(),
            max_word_len: default_max_word_len(),
            book_chunk_words: default_book_chunk_words(),
            books_dir: default_books_dir(),
            dictionary_path: None,
            theme: default_theme(),
            end_screen: default_end_screen(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("homerow")
            .join("config.toml")
    }

    /// Rejects settings the selected mode reads but cannot satisfy.
    pub fn validate(&self) -> Result<(), TextError> {
        let (alphabet, lengths, chunk) = match self.mode {
            GeneratorMode::RandomWords => (true, true, false),
            // Dictionary fallback words use the built-in length range.
            GeneratorMode::DictionaryWords => (true, false, false),
            GeneratorMode::BookSample => (false, false, true),
            GeneratorMode::BookSampleFiltered => (true, true, true),
        };

        if alphabet && self.alphabet.is_empty() {
            return Err(TextError::Config("alphabet is empty".into()));
        }
        if lengths {
            check_range(self.min_word_len, self.max_word_len)?;
        }
        if chunk && self.book_chunk_words == 0 {
            return Err(TextError::Config("book chunk must hold at least one word".into()));
        }
        Ok(())
    }
}
