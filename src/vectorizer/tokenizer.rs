use super::stopwords::ENGLISH_STOP_WORDS;
use std::collections::HashSet;

/// Shortest token kept, in characters
pub const MIN_TOKEN_CHARS: usize = 2;

/// Lower-casing word tokenizer with stopword removal
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: HashSet<String>,
}

impl Tokenizer {
    /// Tokenizer using the built-in English stopword list
    pub fn new() -> Self {
        Self {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add words on top of the built-in list
    pub fn with_extra_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Split text into lower-cased word tokens.
    ///
    /// A word is a maximal run of alphanumerics or `_`. Words shorter than
    /// [`MIN_TOKEN_CHARS`] and stopwords are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|w| !self.is_stop_word(w))
            .map(str::to_string)
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
