use std::collections::HashSet;

use localrec_core::config::AnalyzerSettings;

/// Tokenizer used to build and query the TF-IDF space.
///
/// Lowercases, splits on anything that is not alphanumeric or `_`, drops
/// tokens shorter than `min_token_chars` characters and any stop words.
/// Accents are kept: `café` and `cafe` are different terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analyzer {
    min_token_chars: usize,
    stop_words: HashSet<String>,
}

impl Default for Analyzer {
    fn default() -> Self { Self::new(2) }
}

impl Analyzer {
    pub fn new(min_token_chars: usize) -> Self {
        Self { min_token_chars: min_token_chars.max(1), stop_words: HashSet::new() }
    }

    pub fn from_settings(settings: &AnalyzerSettings) -> Self {
        Self::new(settings.min_token_chars).with_stop_words(&settings.stop_words)
    }

    pub fn with_stop_words<S: AsRef<str>>(mut self, words: &[S]) -> Self {
        self.stop_words = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        self
    }

    pub fn min_token_chars(&self) -> usize { self.min_token_chars }

    pub fn tokens(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_alphanumeric() || c == '_'))
            .filter(|t| t.chars().count() >= self.min_token_chars)
            .filter(|t| !self.stop_words.contains(*t))
            .map(str::to_string)
            .collect()
    }
}
