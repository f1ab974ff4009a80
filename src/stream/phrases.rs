// file: src/stream/phrases.rs
// description: merging of adjacent tokens into known multi-word phrases
// reference: https://radimrehurek.com/gensim/models/phrases.html

use crate::error::{CorpusError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Merges adjacent runs of tokens that form a known phrase.
pub trait PhraseSegmenter {
    fn segment(&self, tokens: Vec<String>) -> Vec<String>;
}

/// Two-word phrases, joined with `_` when both words appear side by side.
#[derive(Debug, Clone, Default)]
pub struct KnownPhrases {
    pairs: HashSet<(String, String)>,
}

impl KnownPhrases {
    pub const DELIMITER: &'static str = "_";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_phrase(mut self, first: &str, second: &str) -> Self {
        self.pairs.insert((first.to_string(), second.to_string()));
        self
    }

    /// One phrase per line, two whitespace-separated words. Blank lines and
    /// lines starting with `#` are skipped.
    pub fn parse(content: &str) -> Result<Self> {
        let mut phrases = Self::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();
            let [first, second] = words.as_slice() else {
                return Err(CorpusError::Validation(format!(
                    "Phrase on line {} must have exactly two words: {:?}",
                    idx + 1,
                    line
                )));
            };
            phrases = phrases.with_phrase(first, second);
        }

        Ok(phrases)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn is_phrase(&self, first: &str, second: &str) -> bool {
        // HashSet<(String, String)> cannot be probed with borrowed halves.
        self.pairs
            .contains(&(first.to_string(), second.to_string()))
    }
}

impl PhraseSegmenter for KnownPhrases {
    fn segment(&self, tokens: Vec<String>) -> Vec<String> {
        let mut merged = Vec::with_capacity(tokens.len());
        let mut iter = tokens.into_iter().peekable();

        while let Some(token) = iter.next() {
            match iter.peek() {
                Some(next) if self.is_phrase(&token, next) => {
                    let next = iter.next().unwrap_or_default();
                    merged.push(format!("{}{}{}", token, Self::DELIMITER, next));
                }
                _ => merged.push(token),
            }
        }

        merged
    }
}
