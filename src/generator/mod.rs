pub mod book;
pub mod dictionary;
pub mod random_words;

use clap::ValueEnum;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::engine::filter::CharFilter;
use crate::error::TextError;
use crate::generator::book::{BookShelf, BookSource, sample_book_text, sample_book_text_filtered};
use crate::generator::dictionary::{
    BundledWords, DictionarySource, WordListFile, generate_dictionary_words,
};
use crate::generator::random_words::generate_random_words;

/// Which strategy produces the target text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorMode {
    /// Random letter groups from the alphabet.
    RandomWords,
    /// Dictionary words spelled only with the alphabet.
    DictionaryWords,
    /// A raw excerpt from a random book.
    BookSample,
    /// A book excerpt reduced to the alphabet and re-cut into words.
    #[default]
    BookSampleFiltered,
}

impl GeneratorMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GeneratorMode::RandomWords => "random",
            GeneratorMode::DictionaryWords => "dictionary",
            GeneratorMode::BookSample => "book",
            GeneratorMode::BookSampleFiltered => "book (filtered)",
        }
    }
}

/// Produces one target text per session using the configured strategy.
pub struct TextProvider {
    mode: GeneratorMode,
    filter: CharFilter,
    word_count: usize,
    min_len: usize,
    max_len: usize,
    chunk_words: usize,
    dictionary: Box<dyn DictionarySource>,
    books: Box<dyn BookSource>,
    rng: SmallRng,
}

impl TextProvider {
    pub fn from_config(config: &Config) -> Self {
        let dictionary: Box<dyn DictionarySource> = match &config.dictionary_path {
            Some(path) => Box::new(WordListFile::new(path)),
            None => Box::new(BundledWords),
        };
        let books = Box::new(BookShelf::new(&config.books_dir));
        Self::with_sources(config, dictionary, books, SmallRng::from_entropy())
    }

    pub fn with_sources(
        config: &Config,
        dictionary: Box<dyn DictionarySource>,
        books: Box<dyn BookSource>,
        rng: SmallRng,
    ) -> Self {
        Self {
            mode: config.mode,
            filter: CharFilter::from_alphabet(&config.alphabet),
            word_count: config.word_count,
            min_len: config.min_word_len,
            max_len: config.max_word_len,
            chunk_words: config.book_chunk_words,
            dictionary,
            books,
            rng,
        }
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn try_next_text(&mut self) -> Result<String, TextError> {
        match self.mode {
            GeneratorMode::RandomWords => generate_random_words(
                &self.filter,
                self.word_count,
                self.min_len,
                self.max_len,
                &mut self.rng,
            ),
            GeneratorMode::DictionaryWords => {
                let words = self.dictionary.load_words()?;
                generate_dictionary_words(&words, &self.filter, self.word_count, &mut self.rng)
            }
            GeneratorMode::BookSample => {
                let book = self.books.load_book(&mut self.rng)?;
                Ok(sample_book_text(&book, self.chunk_words, &mut self.rng))
            }
            GeneratorMode::BookSampleFiltered => {
                let book = self.books.load_book(&mut self.rng)?;
                let chunk = sample_book_text(&book, self.chunk_words, &mut self.rng);
                sample_book_text_filtered(
                    &chunk,
                    &self.filter,
                    self.min_len,
                    self.max_len,
                    &mut self.rng,
                )
            }
        }
    }

    /// Like [`Self::try_next_text`], but failures become a placeholder prompt.
    pub fn next_text(&mut self) -> String {
        match self.try_next_text() {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(mode = self.mode.as_str(), error = %err, "text generation failed");
                err.placeholder()
            }
        }
    }
}
