use rand::Rng;

use crate::engine::filter::CharFilter;
use crate::error::TextError;

pub const DEFAULT_MIN_WORD_LEN: usize = 2;
pub const DEFAULT_MAX_WORD_LEN: usize = 4;

pub(crate) fn check_range(min_len: usize, max_len: usize) -> Result<(), TextError> {
    if min_len == 0 {
        return Err(TextError::Config("minimum word length must be at least 1".into()));
    }
    if min_len > max_len {
        return Err(TextError::Config(format!(
            "minimum word length {min_len} exceeds maximum {max_len}"
        )));
    }
    Ok(())
}

/// `word_count` space-separated words of random length drawn uniformly from
/// the alphabet.
pub fn generate_random_words<R: Rng + ?Sized>(
    filter: &CharFilter,
    word_count: usize,
    min_len: usize,
    max_len: usize,
    rng: &mut R,
) -> Result<String, TextError> {
    if filter.is_empty() {
        return Err(TextError::Config("alphabet is empty".into()));
    }
    check_range(min_len, max_len)?;

    let chars = filter.chars();
    let words: Vec<String> = (0..word_count)
        .map(|_| {
            let len = rng.gen_range(min_len..=max_len);
            (0..len)
                .map(|_| chars[rng.gen_range(0..chars.len())])
                .collect()
        })
        .collect();

    Ok(words.join(" "))
}
