// file: src/models/result.rs
// description: search options and reconstructed hit results handed to callers
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use serde::{Deserialize, Serialize};

/// Per-call search options. Defaults mirror a plain surface-text search with
/// five words of context on each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub window: usize,
    pub document_id: Option<String>,
    pub lemma: bool,
    pub include_match: bool,
    pub include_left: bool,
    pub include_right: bool,
    /// Removed from every reconstructed string, one after another in order.
    pub search_terms: Option<Vec<String>>,
    pub min_year: Option<String>,
    pub max_year: Option<String>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            window: 5,
            document_id: None,
            lemma: false,
            include_match: true,
            include_left: true,
            include_right: true,
            search_terms: None,
            min_year: None,
            max_year: None,
        }
    }
}

impl SearchOptions {
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_document_id(mut self, document_id: impl Into<String>) -> Self {
        self.document_id = Some(document_id.into());
        self
    }

    pub fn with_lemma(mut self, lemma: bool) -> Self {
        self.lemma = lemma;
        self
    }

    pub fn with_include_match(mut self, include_match: bool) -> Self {
        self.include_match = include_match;
        self
    }

    pub fn with_sides(mut self, include_left: bool, include_right: bool) -> Self {
        self.include_left = include_left;
        self.include_right = include_right;
        self
    }

    pub fn with_search_terms(mut self, terms: Vec<String>) -> Self {
        self.search_terms = Some(terms);
        self
    }

    pub fn with_year_range(mut self, min_year: impl Into<String>, max_year: impl Into<String>) -> Self {
        self.min_year = Some(min_year.into());
        self.max_year = Some(max_year.into());
        self
    }

    pub fn search_terms(&self) -> Option<&[String]> {
        self.search_terms.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconstructedResult {
    /// Left context, lemmatised when `lemma` is set
    pub left: String,

    /// Right context, lemmatised when `lemma` is set
    pub right: String,

    /// Surface text of left + match + right, always including the match
    pub match_word: String,

    /// left + match + right, or left + right when the match is excluded
    pub complete_match: String,

    pub testimony_id: String,
    pub shelfmark: String,
    pub token_start: i64,
    pub token_end: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub total: usize,
    pub results: Vec<ReconstructedResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnippetPage {
    pub total: usize,
    pub results: Vec<String>,
}
