use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use rand::RngCore;
use rand::seq::SliceRandom;

use crate::engine::filter::CharFilter;
use crate::error::TextError;
use crate::generator::random_words::check_range;

/// Supplies the full text of one book per call.
pub trait BookSource {
    fn load_book(&self, rng: &mut dyn RngCore) -> Result<String, TextError>;
}

/// A folder of plain-text books; one `.txt` file is picked at random.
pub struct BookShelf {
    dir: PathBuf,
}

impl BookShelf {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn books(&self) -> Result<Vec<PathBuf>, TextError> {
        if !self.dir.is_dir() {
            return Err(TextError::FileNotFound(self.dir.clone()));
        }
        let entries = fs::read_dir(&self.dir).map_err(|source| TextError::ReadFailure {
            path: self.dir.clone(),
            source,
        })?;

        let mut books: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && is_txt(p))
            .collect();
        books.sort();
        Ok(books)
    }
}

fn is_txt(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

impl BookSource for BookShelf {
    fn load_book(&self, rng: &mut dyn RngCore) -> Result<String, TextError> {
        let books = self.books()?;
        let path = books
            .choose(rng)
            .ok_or_else(|| TextError::NoFilesInFolder(self.dir.clone()))?;

        tracing::debug!(book = %path.display(), "loading book");
        let bytes = fs::read(path).map_err(|source| TextError::ReadFailure {
            path: path.clone(),
            source,
        })?;

        // Undecodable bytes are dropped rather than failing the read.
        Ok(String::from_utf8_lossy(&bytes)
            .chars()
            .filter(|&c| c != char::REPLACEMENT_CHARACTER)
            .collect())
    }
}

/// A random run of `chunk_word_count` consecutive words, or the whole text
/// when it is shorter than that.
pub fn sample_book_text<R: Rng + ?Sized>(
    full_text: &str,
    chunk_word_count: usize,
    rng: &mut R,
) -> String {
    let words: Vec<&str> = full_text.split_whitespace().collect();
    if words.len() < chunk_word_count {
        return words.join(" ");
    }
    let start = rng.gen_range(0..=words.len() - chunk_word_count);
    words[start..start + chunk_word_count].join(" ")
}

/// Reduces `full_text` to the alphabet and re-cuts the resulting character
/// stream into words of random length. The final word may be shorter than
/// `min_len`.
pub fn sample_book_text_filtered<R: Rng + ?Sized>(
    full_text: &str,
    filter: &CharFilter,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Result<String, TextError> {
    check_range(min_len, max_len)?;

    let stream: Vec<char> = filter.filter_text(full_text).chars().collect();
    if stream.is_empty() {
        return Err(TextError::EmptySource);
    }

    let mut words: Vec<String> = Vec::new();
    let mut rest = stream.as_slice();
    while !rest.is_empty() {
        let len = rng.gen_range(min_len..=max_len).min(rest.len());
        let (word, tail) = rest.split_at(len);
        words.push(word.iter().collect());
        rest = tail;
    }

    Ok(words.join(" "))
}
