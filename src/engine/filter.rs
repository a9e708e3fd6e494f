/// The set of characters a drill is allowed to use.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharFilter {
    allowed: Vec<char>,
}

impl CharFilter {
    pub fn new(allowed: impl IntoIterator<Item = char>) -> Self {
        let mut deduped = Vec::new();
        for ch in allowed {
            if !deduped.contains(&ch) {
                deduped.push(ch);
            }
        }
        Self { allowed: deduped }
    }

    pub fn from_alphabet(alphabet: &str) -> Self {
        Self::new(alphabet.chars())
    }

    pub fn chars(&self) -> &[char] {
        &self.allowed
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }

    pub fn is_allowed(&self, ch: char) -> bool {
        self.allowed.contains(&ch)
    }

    /// Membership of the lowercase fold of `ch`.
    pub fn is_allowed_folded(&self, ch: char) -> bool {
        ch.to_lowercase().all(|folded| self.is_allowed(folded))
    }

    /// Case-folds `text` and keeps only allowed characters.
    pub fn filter_text(&self, text: &str) -> String {
        text.chars()
            .flat_map(char::to_lowercase)
            .filter(|&ch| self.is_allowed(ch))
            .collect()
    }
}
