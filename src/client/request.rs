// file: src/client/request.rs
// description: ordered, percent-encoded query parameters for the hits endpoint
// reference: https://inl.github.io/BlackLab/server/rest-api/corpus/hits/get.html

use crate::query::{self, combined_filter};
use crate::models::SearchOptions;

/// Query parameters in insertion order. Values are stored already encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitsRequest {
    params: Vec<(String, String)>,
}

impl HitsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base request for a search: compiled pattern, context window, json
    /// output, exact totals and the optional metadata filter.
    pub fn for_search(raw_query: &str, options: &SearchOptions) -> Self {
        let mut request = Self::new()
            .push("patt", &query::compile(raw_query))
            .push("waitfortotal", "true")
            .push("outputformat", "json")
            .push("prettyprint", "no")
            .push("wordsaroundhit", &options.window.to_string());

        if let Some(filter) = combined_filter(
            options.document_id.as_deref(),
            options.min_year.as_deref(),
            options.max_year.as_deref(),
        ) {
            request = request.push_encoded("filter", filter);
        }

        request
    }

    pub fn push(mut self, key: &str, raw_value: &str) -> Self {
        self.params
            .push((key.to_string(), urlencoding::encode(raw_value).into_owned()));
        self
    }

    pub fn push_encoded(mut self, key: &str, encoded_value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), encoded_value.into()));
        self
    }

    /// Ask only for the total.
    pub fn counting(&self) -> Self {
        self.clone().push("number", "0")
    }

    pub fn page(&self, first: usize, limit: usize) -> Self {
        self.clone()
            .push("first", &first.to_string())
            .push("limit", &limit.to_string())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn query_string(&self) -> String {
        self.params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn to_url(&self, endpoint: &str) -> String {
        format!("{}?{}", endpoint, self.query_string())
    }
}
