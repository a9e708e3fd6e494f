use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::seq::SliceRandom;
use rust_embed::Embed;

use crate::engine::filter::CharFilter;
use crate::error::TextError;
use crate::generator::random_words::{
    DEFAULT_MAX_WORD_LEN, DEFAULT_MIN_WORD_LEN, generate_random_words,
};

#[derive(Embed)]
#[folder = "assets/words/"]
struct WordAssets;

const BUNDLED_LIST: &str = "words-en.txt";

/// Supplies the raw word list for dictionary drills.
pub trait DictionarySource {
    fn load_words(&self) -> Result<Vec<String>, TextError>;
}

/// A word list on disk, one word per line.
pub struct WordListFile {
    path: PathBuf,
}

impl WordListFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DictionarySource for WordListFile {
    fn load_words(&self) -> Result<Vec<String>, TextError> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TextError::FileNotFound(self.path.clone()),
            _ => TextError::ReadFailure {
                path: self.path.clone(),
                source: e,
            },
        })?;

        let words = parse_word_list(&content);
        if words.is_empty() {
            return Err(TextError::EmptyFile(self.path.clone()));
        }
        Ok(words)
    }
}

/// The English list compiled into the binary.
pub struct BundledWords;

impl DictionarySource for BundledWords {
    fn load_words(&self) -> Result<Vec<String>, TextError> {
        let file = WordAssets::get(BUNDLED_LIST)
            .ok_or_else(|| TextError::FileNotFound(PathBuf::from(BUNDLED_LIST)))?;
        let content = String::from_utf8_lossy(file.data.as_ref());
        let words = parse_word_list(&content);
        if words.is_empty() {
            return Err(TextError::EmptyFile(PathBuf::from(BUNDLED_LIST)));
        }
        Ok(words)
    }
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Words made only of alphabet characters (case-folded).
pub fn find_matching<'a>(words: &'a [String], filter: &CharFilter) -> Vec<&'a str> {
    words
        .iter()
        .filter(|w| w.chars().all(|c| filter.is_allowed_folded(c)))
        .map(|s| s.as_str())
        .collect()
}

/// Draws `word_count` dictionary words (with replacement) that fit the
/// alphabet. Falls back to random letter groups when nothing fits.
pub fn generate_dictionary_words<R: Rng + ?Sized>(
    words: &[String],
    filter: &CharFilter,
    word_count: usize,
    rng: &mut R,
) -> Result<String, TextError> {
    let matching = find_matching(words, filter);
    if matching.is_empty() {
        tracing::debug!(
            dictionary_size = words.len(),
            "no dictionary words fit the alphabet, using random words"
        );
        return generate_random_words(
            filter,
            word_count,
            DEFAULT_MIN_WORD_LEN,
            DEFAULT_MAX_WORD_LEN,
            rng,
        );
    }

    let picked: Vec<&str> = (0..word_count)
        .filter_map(|_| matching.choose(rng).copied())
        .collect();
    Ok(picked.join(" "))
}
